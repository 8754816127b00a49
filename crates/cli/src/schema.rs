use bundlescope_core::BundleConfig;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", render()?);
    Ok(())
}

pub(crate) fn render() -> serde_json::Result<String> {
    let schema = schemars::schema_for!(BundleConfig);
    serde_json::to_string_pretty(&schema)
}
