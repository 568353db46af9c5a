use clap::Parser;
use contact_form::{
    get_contact_config, utils::load_attachment, ui::terminal::TerminalView, ContactFormController,
    FormSnapshot, HttpTransport, SubmitOutcome,
};
use env_logger::Env;
use log::{error, info};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

/// Send a message through the site's contact form.
#[derive(Parser, Debug)]
#[command(name = "contact-form", version)]
struct Args {
    #[arg(long)]
    name: Option<String>,

    #[arg(long)]
    email: Option<String>,

    #[arg(long)]
    message: Option<String>,

    /// Image to attach (JPG or PNG); may be repeated
    #[arg(long = "attachment", value_name = "PATH")]
    attachments: Vec<PathBuf>,

    /// Token issued by the CAPTCHA widget
    #[arg(long, env = "CONTACT_CAPTCHA_TOKEN")]
    captcha_token: Option<String>,
}

async fn build_form(args: &Args) -> Result<FormSnapshot, contact_form::ContactError> {
    let mut form = FormSnapshot::new(args.name.clone(), args.email.clone(), args.message.clone());
    for path in &args.attachments {
        form = form.with_attachment(load_attachment(path).await?);
    }
    Ok(form)
}

#[tokio::main]
async fn main() -> ExitCode {
    // Before argument parsing so clap's env fallbacks see `.env` values
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let config = match get_contact_config() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let transport = match HttpTransport::new(&config) {
        Ok(transport) => transport,
        Err(e) => {
            error!("Failed to build HTTP client: {}", e);
            return ExitCode::FAILURE;
        }
    };
    info!("Using contact endpoint {}", transport.endpoint());

    let form = match build_form(&args).await {
        Ok(form) => form,
        Err(e) => {
            error!("Failed to load attachment: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let view = Arc::new(TerminalView::new(form, args.captcha_token.clone()));
    let controller = ContactFormController::new(view.clone(), Arc::new(transport), &config);

    controller.on_attachment_change();

    match controller.on_submit().await {
        SubmitOutcome::Sent => {
            controller.settle().await;
            ExitCode::SUCCESS
        }
        SubmitOutcome::Failed(_) | SubmitOutcome::Ignored => ExitCode::FAILURE,
    }
}
