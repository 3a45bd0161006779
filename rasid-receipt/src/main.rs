use rasid_receipt::{Config, ImageSlot, ImageStore, ReceiptData, ReceiptRenderer, ReceiptResult};

fn main() -> ReceiptResult<()> {
    // Environment (dotenv, logging)
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut config = Config::from_env()?;
    // First CLI argument overrides the env-configured receipt path
    if let Some(path) = std::env::args().nth(1) {
        config.receipt_path = Some(path.into());
    }

    // Persisted receipt assets: import freshly supplied images, then
    // report which slots are available for the printed page
    let store = ImageStore::open(&config.data_dir)?;
    if let Some(path) = &config.logo_path {
        store.import_file(ImageSlot::Logo, path)?;
    }
    if let Some(path) = &config.signature_path {
        store.import_file(ImageSlot::Signature, path)?;
    }
    for slot in [ImageSlot::Logo, ImageSlot::Signature] {
        match store.slot_path(slot) {
            Ok(path) => tracing::info!(slot = %slot, path = %path.display(), "using stored image"),
            Err(_) => tracing::debug!(slot = %slot, "no stored image"),
        }
    }

    let receipt = match &config.receipt_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading receipt");
            let raw = std::fs::read_to_string(path)?;
            serde_json::from_str::<ReceiptData>(&raw)?
        }
        None => ReceiptData::default(),
    };

    tracing::info!(customer = %receipt.customer_name, "rendering receipt");
    let output = ReceiptRenderer::new(&receipt, config.paper_width).render();
    print!("{output}");

    Ok(())
}
