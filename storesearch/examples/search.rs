use clap::Parser;
use storesearch::StoreSearchClient;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Text to search the storefront for
    #[arg(short, long, default_value = "Counter Strike")]
    term: String,
}

// Print every result for a search term along with its raw price block
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let args = Args::parse();
    let client = StoreSearchClient::new("storesearch-examples")?;
    let results = client.search(&args.term).await?;
    for item in results.items {
        match item.price {
            Some(price) => println!(
                "{:>8} {:<50} initial: {:?} final: {:?}",
                item.id, item.name, price.initial_cents, price.final_cents
            ),
            None => println!("{:>8} {:<50} (no price)", item.id, item.name),
        }
    }
    Ok(())
}
