//! `smd detect <url>` – classify a link without the simulated wait.

use anyhow::Result;
use smd_core::lookup::LookupError;
use smd_core::platform;

pub fn run_detect(url: &str) -> Result<()> {
    match platform::detect(url) {
        Some(d) => {
            println!("{:<10} {}", "PLATFORM", "ID");
            println!("{:<10} {}", d.platform, d.id);
            Ok(())
        }
        None => Err(LookupError::UnsupportedUrl.into()),
    }
}
