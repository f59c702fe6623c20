mod common;

use common::{api_for, RecordingSurface};
use httpmock::MockServer;
use umrahflex_admin::core::RegionContent;

#[test]
fn test_utils_group_formats_values() {
    let server = MockServer::start();
    let api = api_for(&server, RecordingSurface::new(true));

    assert_eq!(api.utils.format_currency(150000.0), "PKR 150,000");
    assert_eq!(api.utils.format_currency_in(1000.0, "USD"), "USD 1,000");
    assert_eq!(api.utils.format_date("2024-03-05"), "05 Mar 2024");
}

#[test]
fn test_utils_group_notifies_through_surface() {
    let server = MockServer::start();
    let surface = RecordingSurface::new(true);
    let api = api_for(&server, surface.clone());

    api.utils.show_loading("content");
    api.utils.show_loading("sidebar");
    api.utils.show_error("Could not save", Some("content"));
    api.utils.show_success("Saved");

    assert_eq!(
        *surface.rendered.lock().unwrap(),
        vec![
            ("content".to_string(), RegionContent::Loading),
            ("content".to_string(), RegionContent::Error("Could not save".to_string())),
        ]
    );
    assert_eq!(surface.alerts(), vec!["Error: Could not save".to_string()]);
    assert_eq!(surface.toasts(), vec!["Saved".to_string()]);
}

#[test]
fn test_config_file_feeds_api() -> anyhow::Result<()> {
    use std::io::Write;
    use umrahflex_admin::config::toml_config::TomlConfig;
    use umrahflex_admin::ApiConfig;

    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(file, "[api]\nbase_url = \"http://localhost:8000/api\"\n\n[ui]\ntoast_seconds = 4")?;

    let toml = TomlConfig::from_file(file.path())?;
    let config = ApiConfig::resolve(Some(&toml), None)?;

    assert_eq!(config.base_url, "http://localhost:8000/api");
    assert_eq!(config.toast_duration.as_secs(), 4);

    let api = umrahflex_admin::Api::from_config(&config, RecordingSurface::new(true))?;
    assert_eq!(api.packages.client().kind().path(), "packages");
    Ok(())
}
