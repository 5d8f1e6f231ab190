use super::*;

fn firebase() -> FirebaseWebConfig {
    FirebaseWebConfig {
        api_key: "key".into(),
        auth_domain: "tambo.firebaseapp.com".into(),
        project_id: "tambo".into(),
        storage_bucket: "tambo.appspot.com".into(),
        messaging_sender_id: "123".into(),
        app_id: "1:123:web:abc".into(),
    }
}

#[test]
fn worker_script_embeds_camel_case_config() {
    let script = worker_script(&firebase());
    assert!(script.contains(r#""projectId":"tambo""#));
    assert!(script.contains(r#""messagingSenderId":"123""#));
    assert!(!script.contains("project_id"));
}

#[test]
fn worker_script_loads_sdk_and_handles_clicks() {
    let script = worker_script(&firebase());
    assert!(script.starts_with("importScripts('https://www.gstatic.com/firebasejs/9.22.1/firebase-app-compat.js');"));
    assert!(script.contains("onBackgroundMessage"));
    assert!(script.contains("notificationclick"));
    assert!(script.contains("'/alertas'"));
}

#[test]
fn worker_script_escapes_config_values() {
    let mut config = firebase();
    config.api_key = "k'\"); alert(1); //".into();
    let script = worker_script(&config);
    assert!(script.contains(r#""apiKey":"k'\"); alert(1); //""#));
}
