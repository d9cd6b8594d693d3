use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};

use study_notes::cli::{Cli, Commands};
use study_notes::{logger, App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 加载配置
    let config = Config::load(cli.config.as_deref())?;

    // 初始化日志
    logger::init(cli.verbose || config.verbose_logging);

    match cli.command {
        Commands::Ping => {
            let app = App::initialize(config)?;
            let reply = app.ping().await?;
            info!("✅ 连接正常: {}", reply);
        }
        Commands::Generate(args) => {
            let input = args.run_input()?;
            let app = App::initialize(args.apply(config))?;
            let outcome = app.run(input).await?;

            let summary = &outcome.summary;
            if summary.failed() == 0 {
                info!("🎉 All {} questions processed successfully!", summary.succeeded());
            } else {
                warn!(
                    "⚠️ Completed with {} successful, {} failed",
                    summary.succeeded(),
                    summary.failed()
                );
                info!("💡 Check the end of the document for failed questions summary");
            }
            println!("{}", outcome.output_path.display());
        }
    }

    Ok(())
}
