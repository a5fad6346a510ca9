use clap::Parser;
use inspect::{Args, init_tracing, run};

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_tracing(args.json_logs);

    match run(&args).await {
        Ok(report) => println!("{}", report),
        Err(e) => {
            tracing::error!(error = %e, "Inspection failed");
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
