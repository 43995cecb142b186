use anyhow::{bail, Result};

use folio_core::contact::{create_relay, ContactMessage};
use folio_core::AppConfig;

pub async fn run(
    config: &AppConfig,
    name: &str,
    email: &str,
    phone: Option<&str>,
    message: &str,
) -> Result<()> {
    let message = ContactMessage::new(name, email, phone, message);

    let errors = message.field_errors();
    if !errors.is_empty() {
        for (field, error) in &errors {
            eprintln!("  {}: {}", field, error);
        }
        bail!("Message not sent: {} invalid field(s)", errors.len());
    }

    if !config.contact.is_configured() {
        bail!(
            "Contact relay is not configured.\nSet service_id, template_id and public_key under [contact] in:\n  {}",
            AppConfig::config_path().display()
        );
    }

    let relay = create_relay(&config.contact)?;
    println!("Sending via {}...", relay.name());
    relay.send(&message).await?;
    println!("Message sent.");

    Ok(())
}
