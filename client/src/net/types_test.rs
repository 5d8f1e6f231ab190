use super::*;
use crate::state::channels::{Channel, ChannelUniverse};

// =============================================================
// Users
// =============================================================

#[test]
fn user_decodes_with_missing_optional_fields() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": 3,
        "firstName": "Rosa",
        "lastNameP": "Quispe",
        "role": "Niño"
    }))
    .unwrap();
    assert_eq!(user.id, 3);
    assert_eq!(user.role, Role::Nino);
    assert_eq!(user.full_name(), "Rosa Quispe");
    assert!(user.firebase_token.is_none());
}

#[test]
fn user_serializes_camel_case_without_absent_token() {
    let user = User { id: 1, first_name: "Ana".into(), role: Role::Administrador, ..User::default() };
    let value = serde_json::to_value(&user).unwrap();
    assert_eq!(value["firstName"], "Ana");
    assert_eq!(value["role"], "Administrador");
    assert!(value.get("firebaseToken").is_none());
}

#[test]
fn login_response_flattens_user_and_token() {
    let resp: LoginResponse = serde_json::from_value(serde_json::json!({
        "id": 9,
        "firstName": "Luz",
        "documentNumber": "12345678",
        "role": "Gestor",
        "token": "jwt"
    }))
    .unwrap();
    assert_eq!(resp.user.id, 9);
    assert_eq!(resp.user.document_number, "12345678");
    assert_eq!(resp.token.as_deref(), Some("jwt"));
}

#[test]
fn role_labels_round_trip() {
    for role in Role::ALL {
        assert_eq!(Role::from_label(role.label()), Some(role));
    }
    assert!(Role::Gestor.is_staff());
    assert!(!Role::Gestante.is_staff());
}

// =============================================================
// Stations and patients
// =============================================================

#[test]
fn tambo_without_id_omits_it_on_the_wire() {
    let tambo = Tambo { name: "Tambo Ancón".into(), tipo: TamboTipo::Movil, ..Tambo::default() };
    let value = serde_json::to_value(&tambo).unwrap();
    assert!(value.get("id").is_none());
    assert_eq!(value["tipo"], "Movil");
    assert_eq!(value["horarioAtencion"], serde_json::Value::Null);
}

#[test]
fn paciente_display_name_prefers_nombre_completo() {
    let p: Paciente = serde_json::from_value(serde_json::json!({
        "id": 4, "userId": 2, "tieneAnemia": true, "nombreCompleto": "  Juan Pérez "
    }))
    .unwrap();
    assert_eq!(p.display_name(), "Juan Pérez");

    let nested: Paciente = serde_json::from_value(serde_json::json!({
        "id": 5, "userId": 2, "usuario": {"firstName": "Eva", "lastNameP": "Soto", "lastNameM": "Ruiz"}
    }))
    .unwrap();
    assert_eq!(nested.display_name(), "Eva Soto Ruiz");

    let bare = Paciente { id: 6, ..Paciente::default() };
    assert_eq!(bare.display_name(), "Paciente #6");
}

#[test]
fn visita_names_fall_back_to_ids() {
    let v: Visita = serde_json::from_value(serde_json::json!({
        "id": 1, "pacienteId": 7, "gestorId": 8, "fechaVisita": "2024-05-01T00:00:00",
        "gestor": {"firstName": "Mario", "lastNameP": "Díaz", "lastNameM": ""}
    }))
    .unwrap();
    assert_eq!(v.paciente_nombre(), "#7");
    assert_eq!(v.gestor_nombre(), "Mario Díaz");
}

// =============================================================
// Announcements and alerts
// =============================================================

#[test]
fn comunicado_accepts_numeric_and_named_enums() {
    let numeric: Comunicado = serde_json::from_value(serde_json::json!({
        "id": 1, "titulo": "Vacunas", "destinatario": 1, "canalEnvio": 5, "tipoContenido": 2
    }))
    .unwrap();
    assert_eq!(numeric.destinatario, Destinatario::Gestante);
    assert_eq!(numeric.tipo_contenido, Some(TipoContenido::Preventivo));
    assert_eq!(numeric.canal_envio.bits(), 5);

    let named: Comunicado = serde_json::from_value(serde_json::json!({
        "titulo": "Hierro", "destinatario": "Todos", "canalEnvio": "Todos", "tipoContenido": "Educativo",
        "urlPDF": "/files/a.pdf"
    }))
    .unwrap();
    assert_eq!(named.destinatario, Destinatario::Todos);
    assert_eq!(named.canal_envio.bits(), 15);
    assert_eq!(named.url_pdf.as_deref(), Some("/files/a.pdf"));
}

#[test]
fn comunicado_serializes_enums_as_integers() {
    let c: Comunicado = serde_json::from_value(serde_json::json!({
        "titulo": "t", "destinatario": 3, "canalEnvio": 9
    }))
    .unwrap();
    let value = serde_json::to_value(&c).unwrap();
    assert_eq!(value["destinatario"], 3);
    assert_eq!(value["canalEnvio"], 9);
    assert!(value.get("id").is_none());
}

#[test]
fn unknown_destinatario_is_rejected() {
    let result = serde_json::from_value::<Comunicado>(serde_json::json!({
        "titulo": "t", "destinatario": 9, "canalEnvio": 1
    }));
    assert!(result.is_err());
}

#[test]
fn alerta_channels_drop_whatsapp_bit() {
    let a: Alerta = serde_json::from_value(serde_json::json!({
        "id": 2, "pacienteId": 3, "tipo": "ControlMedico", "categoria": "Niño",
        "mensaje": "Control", "fechaAlerta": "2024-06-01", "canalEnvio": 15,
        "periodicidad": "Semanal", "creadoPorUserId": 1
    }))
    .unwrap();
    assert_eq!(a.canal_envio.universe(), ChannelUniverse::Alert);
    assert_eq!(a.canal_envio.bits(), 7);
    assert!(!a.canal_envio.contains(Channel::WhatsApp));
    assert_eq!(a.categoria, AlertaCategoria::Nino);
    assert_eq!(a.periodicidad, Some(PeriodicidadAlerta::Semanal));
}

#[test]
fn labelled_enums_resolve_labels() {
    assert_eq!(AlertaTipo::from_label("SuplementoHierro"), Some(AlertaTipo::SuplementoHierro));
    assert_eq!(TipoExportacion::ALL.len(), 8);
    assert_eq!(PrioridadAlerta::from_label("Urgente"), None);
}

// =============================================================
// Exports and push
// =============================================================

#[test]
fn export_history_envelope_defaults_to_empty() {
    let empty: ExportHistoryResponse = serde_json::from_str("{}").unwrap();
    assert!(empty.historial.is_empty());
    let full: ExportHistoryResponse = serde_json::from_value(serde_json::json!({
        "historial": [{"id": 1, "tipoExportacion": "Visitas", "fechaExportacion": "2024-01-01", "formato": "xlsx", "estado": "OK"}]
    }))
    .unwrap();
    assert_eq!(full.historial[0].formato, "xlsx");
}

#[test]
fn export_request_wire_shape() {
    let req = ExportRequest {
        usuario_id: 1,
        tipo_exportacion: TipoExportacion::Alertas,
        filtros_aplicados: "{}".into(),
        nombre_entidad: "Alertas".into(),
        fecha_inicio: "2024-01-01T00:00:00.000Z".into(),
        fecha_fin: "2024-02-01T00:00:00.000Z".into(),
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["tipoExportacion"], "Alertas");
    assert_eq!(value["usuarioId"], 1);
}

#[test]
fn push_message_title_prefers_notification_block() {
    let msg: PushMessage = serde_json::from_value(serde_json::json!({
        "notification": {"title": "Alerta", "body": "Control mañana"}
    }))
    .unwrap();
    assert_eq!(msg.title_and_body(), Some(("Alerta".into(), "Control mañana".into())));

    let data_only: PushMessage = serde_json::from_value(serde_json::json!({"data": {"title": "T"}})).unwrap();
    assert_eq!(data_only.title_and_body(), Some(("T".into(), String::new())));

    assert_eq!(PushMessage::default().title_and_body(), None);
}

#[test]
fn runtime_config_push_requires_project_and_vapid() {
    let mut cfg = RuntimeConfig::default();
    assert!(!cfg.push_enabled());
    cfg.firebase.project_id = "tambo".into();
    cfg.vapid_key = "BO...".into();
    assert!(cfg.push_enabled());
}
