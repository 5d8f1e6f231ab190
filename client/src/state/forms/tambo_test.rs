use super::*;
use crate::net::types::Role;

fn staff(dni: &str, first: &str, role: Role) -> User {
    User { document_number: dni.into(), first_name: first.into(), last_name_p: "Vega".into(), role, ..User::default() }
}

fn create_ready() -> TamboForm {
    let mut form = TamboForm { name: "Tambo Ancón".into(), ..TamboForm::default() };
    let p = form.location.select_department("Lima").unwrap();
    form.location.provinces_loaded(p.epoch(), Ok(vec!["Lima".into()]));
    let d = form.location.select_province("Lima").unwrap();
    form.location.districts_loaded(d.epoch(), Ok(vec!["Ancón".into()]));
    let c = form.location.select_district("Ancón").unwrap();
    form.location.code_loaded(c.epoch(), Ok("LIM-ANC-01".into()));
    form
}

#[test]
fn representative_options_only_include_staff() {
    let users = vec![
        staff("11111111", "Ana", Role::Administrador),
        staff("22222222", "Beto", Role::Gestante),
        staff("33333333", "Caro", Role::Gestor),
    ];
    let opts = representative_options(&users);
    assert_eq!(opts.len(), 2);
    assert_eq!(opts[1].full_name, "Caro Vega");
}

#[test]
fn selecting_known_dni_autofills_name() {
    let opts = vec![RepresentativeOption { dni: "11111111".into(), full_name: "Ana Vega".into() }];
    let mut form = TamboForm::default();
    form.representante = "typed".into();
    form.select_representative("99999999", &opts);
    assert_eq!(form.representante, "typed");
    form.select_representative("11111111", &opts);
    assert_eq!(form.representante, "Ana Vega");
    assert_eq!(form.documento_representante, "11111111");
}

#[test]
fn create_validate_uses_generated_code() {
    let tambo = create_ready().validate().unwrap();
    assert_eq!(tambo.id, None);
    assert_eq!(tambo.code, "LIM-ANC-01");
    assert_eq!(tambo.distrito, "Ancón");
    assert!(tambo.estado);
    assert_eq!(tambo.referencia, None);
}

#[test]
fn validate_blocks_while_code_pending() {
    let mut form = create_ready();
    let _ = form.location.select_district("Lima");
    assert!(form.submit_blocked());
    assert_eq!(form.validate(), Err(FormError::CodePending));
}

#[test]
fn validate_requires_location() {
    let form = TamboForm { name: "X".into(), ..TamboForm::default() };
    assert_eq!(form.validate(), Err(FormError::Required("Departamento")));
}

#[test]
fn edit_keeps_stored_location_and_code() {
    let stored = Tambo {
        id: Some(8),
        name: "Tambo Huaral".into(),
        code: "LIM-HUA-03".into(),
        departamento: "Lima".into(),
        provincia: "Huaral".into(),
        distrito: "Huaral".into(),
        estado: false,
        ..Tambo::default()
    };
    let (form, requests) = TamboForm::from_tambo(&stored);
    assert!(form.is_edit());
    assert_eq!(requests.len(), 2);
    let tambo = form.validate().unwrap();
    assert_eq!(tambo.id, Some(8));
    assert_eq!(tambo.code, "LIM-HUA-03");
    assert!(!tambo.estado);
}
