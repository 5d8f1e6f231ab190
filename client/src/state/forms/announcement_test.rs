use super::*;

fn titled() -> AnnouncementForm {
    AnnouncementForm { titulo: "Campaña de vacunación".into(), ..AnnouncementForm::default() }
}

#[test]
fn defaults_to_app_channel_for_children() {
    let form = AnnouncementForm::default();
    assert_eq!(form.canal_envio.bits(), 1);
    assert_eq!(form.destinatario, Destinatario::Nino);
    assert_eq!(form.tipo_contenido, TipoContenido::Informativo);
}

#[test]
fn title_is_required() {
    assert_eq!(AnnouncementForm::default().validate(), Err(FormError::Required("Título")));
}

#[test]
fn end_before_start_is_rejected() {
    let mut form = titled();
    form.fecha_inicio = "2024-05-10".into();
    form.fecha_fin = "2024-05-09".into();
    assert!(matches!(form.validate(), Err(FormError::Invalid(_))));
    form.fecha_fin = "2024-05-10".into();
    assert!(form.validate().is_ok());
}

#[test]
fn toggling_channels_builds_mask() {
    let mut form = titled();
    form.toggle_channel(Channel::WhatsApp);
    form.toggle_channel(Channel::Email);
    assert_eq!(form.validate().unwrap().canal_envio.bits(), 1 | 4 | 8);
    form.toggle_channel(Channel::App);
    assert_eq!(form.canal_envio.bits(), 4 | 8);
}

#[test]
fn view_mode_ignores_channel_toggles() {
    let mut form = AnnouncementForm { read_only: true, ..titled() };
    form.toggle_channel(Channel::Sms);
    assert_eq!(form.canal_envio.bits(), 1);
}

#[test]
fn upload_fills_slot_and_blocks_submit_meanwhile() {
    let mut form = titled();
    form.begin_upload(AttachmentKind::Pdf);
    assert!(form.validate().is_err());
    form.finish_upload(AttachmentKind::Pdf, Some("uploads/guia.pdf".into()));
    let payload = form.validate().unwrap();
    assert_eq!(payload.url_pdf.as_deref(), Some("uploads/guia.pdf"));
    assert_eq!(payload.imagen_url, None);
}

#[test]
fn failed_upload_keeps_previous_attachment() {
    let mut form = AnnouncementForm { imagen_url: "old.png".into(), ..titled() };
    form.begin_upload(AttachmentKind::Image);
    form.finish_upload(AttachmentKind::Image, None);
    assert_eq!(form.uploading, None);
    assert_eq!(form.imagen_url, "old.png");
}

#[test]
fn seeding_masks_stored_channels_and_trims_dates() {
    let stored: Comunicado = serde_json::from_str(
        r#"{"id":3,"titulo":"T","cuerpo":"","destinatario":1,"fechaInicio":"2024-01-01T00:00:00",
            "fechaFin":"2024-02-01T00:00:00","canalEnvio":31,"tipoContenido":2}"#,
    )
    .unwrap();
    let form = AnnouncementForm::from_announcement(&stored, true);
    assert!(form.read_only);
    assert_eq!(form.canal_envio.bits(), 15);
    assert_eq!(form.fecha_inicio, "2024-01-01");
    assert_eq!(form.destinatario, Destinatario::Gestante);
    assert_eq!(form.tipo_contenido, TipoContenido::Preventivo);
}
