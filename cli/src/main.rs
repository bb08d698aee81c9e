mod app;
mod cmd;
mod config;


use clap::Parser;

#[tokio::main]
async fn main() {
    let cmd = app::Command::parse();
    cmd.set_log_level();

    let client = match cmd.load_config().and_then(|cfg| cmd.build_client(cfg)) {
        Ok(value) => value,
        Err(err) => {
            tracing::error!("unable to configure client: {err:?}");
            eprintln!("error: {err:#}");
            std::process::exit(exitcode::CONFIG);
        }
    };

    let mut stdout = std::io::stdout().lock();
    if let Err(err) = cmd.execute(&client, &mut stdout).await {
        tracing::error!("command failed: {err:?}");
        eprintln!("error: {err:#}");
        std::process::exit(app::exit_code(&err));
    }
    std::process::exit(exitcode::OK);
}
