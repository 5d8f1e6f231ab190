use super::*;

fn lima_triple(selector: &mut LocationSelector) -> LookupRequest {
    let p = selector.select_department("Lima").unwrap();
    assert!(selector.provinces_loaded(p.epoch(), Ok(vec!["Lima".into(), "Huaral".into()])));
    let d = selector.select_province("Lima").unwrap();
    assert!(selector.districts_loaded(d.epoch(), Ok(vec!["Lima".into(), "Ancón".into()])));
    selector.select_district("Lima").unwrap()
}

// =============================================================
// Reset semantics
// =============================================================

#[test]
fn new_selector_is_idle() {
    let selector = LocationSelector::new();
    assert_eq!(selector.phase(), LocationPhase::Idle);
    assert!(selector.is_create());
}

#[test]
fn selecting_department_clears_province_and_district_before_fetch() {
    let mut selector = LocationSelector::new();
    let _ = lima_triple(&mut selector);
    let req = selector.select_department("Cusco");
    assert_eq!(selector.province, "");
    assert_eq!(selector.district, "");
    assert_eq!(selector.code, "");
    assert!(selector.districts.is_empty());
    assert_eq!(selector.phase(), LocationPhase::LoadingProvinces);
    assert!(matches!(req, Some(LookupRequest::Provinces { ref department, .. }) if department == "Cusco"));
}

#[test]
fn selecting_province_clears_district_before_fetch() {
    let mut selector = LocationSelector::new();
    let _ = lima_triple(&mut selector);
    let req = selector.select_province("Huaral").unwrap();
    assert_eq!(selector.district, "");
    assert_eq!(selector.phase(), LocationPhase::LoadingDistricts);
    assert_eq!(
        req,
        LookupRequest::Districts { epoch: req.epoch(), department: "Lima".into(), province: "Huaral".into() }
    );
}

#[test]
fn empty_department_issues_no_lookup() {
    let mut selector = LocationSelector::new();
    assert!(selector.select_department("").is_none());
    assert_eq!(selector.phase(), LocationPhase::Idle);
}

// =============================================================
// Code lookup
// =============================================================

#[test]
fn full_triple_in_create_mode_requests_code() {
    let mut selector = LocationSelector::new();
    let req = lima_triple(&mut selector);
    assert!(matches!(
        req,
        LookupRequest::Code { ref department, ref province, ref district, .. }
            if department == "Lima" && province == "Lima" && district == "Lima"
    ));
    assert!(selector.code_pending());
    assert_eq!(selector.phase(), LocationPhase::LoadingCode);
    assert!(selector.code_loaded(req.epoch(), Ok("LIM-LIM-LIM-001".into())));
    assert_eq!(selector.code, "LIM-LIM-LIM-001");
    assert_eq!(selector.phase(), LocationPhase::Ready);
}

#[test]
fn stale_code_response_never_overwrites_newer_selection() {
    let mut selector = LocationSelector::new();
    let first = lima_triple(&mut selector);
    let second = selector.select_district("Ancón").unwrap();
    assert!(matches!(second, LookupRequest::Code { ref district, .. } if district == "Ancón"));

    assert!(!selector.code_loaded(first.epoch(), Ok("STALE".into())));
    assert_eq!(selector.code, "");
    assert!(selector.code_pending());

    assert!(selector.code_loaded(second.epoch(), Ok("LIM-LIM-ANC-001".into())));
    assert_eq!(selector.code, "LIM-LIM-ANC-001");
}

#[test]
fn stale_code_response_after_fresh_one_is_ignored() {
    let mut selector = LocationSelector::new();
    let first = lima_triple(&mut selector);
    let second = selector.select_district("Ancón").unwrap();
    assert!(selector.code_loaded(second.epoch(), Ok("NEW".into())));
    assert!(!selector.code_loaded(first.epoch(), Ok("OLD".into())));
    assert_eq!(selector.code, "NEW");
}

#[test]
fn code_failure_keeps_previous_value_and_unblocks() {
    let mut selector = LocationSelector::new();
    let req = lima_triple(&mut selector);
    assert!(selector.code_loaded(req.epoch(), Err("500".into())));
    assert_eq!(selector.code, "");
    assert!(!selector.code_pending());
}

#[test]
fn department_change_invalidates_pending_code() {
    let mut selector = LocationSelector::new();
    let req = lima_triple(&mut selector);
    let _ = selector.select_department("Cusco");
    assert!(!selector.code_loaded(req.epoch(), Ok("LATE".into())));
    assert_eq!(selector.code, "");
}

// =============================================================
// Option lookups
// =============================================================

#[test]
fn rapid_department_reselection_keeps_last_provinces() {
    let mut selector = LocationSelector::new();
    let a = selector.select_department("Lima").unwrap();
    let b = selector.select_department("Cusco").unwrap();
    assert!(selector.provinces_loaded(b.epoch(), Ok(vec!["Urubamba".into()])));
    assert!(!selector.provinces_loaded(a.epoch(), Ok(vec!["Huaral".into()])));
    assert_eq!(selector.provinces, vec!["Urubamba".to_owned()]);
}

#[test]
fn province_failure_keeps_previous_options() {
    let mut selector = LocationSelector::new();
    selector.provinces = vec!["Old".into()];
    let req = selector.select_department("Lima").unwrap();
    assert!(selector.provinces_loaded(req.epoch(), Err("timeout".into())));
    assert_eq!(selector.provinces, vec!["Old".to_owned()]);
}

#[test]
fn departments_loaded_failure_keeps_list() {
    let mut selector = LocationSelector::new();
    selector.departments_loaded(Ok(vec!["Lima".into()]));
    selector.departments_loaded(Err("offline".into()));
    assert_eq!(selector.departments, vec!["Lima".to_owned()]);
}

// =============================================================
// Edit mode
// =============================================================

#[test]
fn existing_station_loads_triple_verbatim_without_code_lookup() {
    let (mut selector, requests) = LocationSelector::for_existing(7, "Lima", "Lima", "Ancón", "T-0007");
    assert_eq!(selector.code, "T-0007");
    assert_eq!(requests.len(), 2);
    assert!(requests.iter().all(|r| !matches!(r, LookupRequest::Code { .. })));

    // Option refreshes never touch the selection.
    for r in &requests {
        match r {
            LookupRequest::Provinces { epoch, .. } => {
                assert!(selector.provinces_loaded(*epoch, Ok(vec!["Lima".into()])));
            }
            LookupRequest::Districts { epoch, .. } => {
                assert!(selector.districts_loaded(*epoch, Ok(vec!["Ancón".into()])));
            }
            LookupRequest::Code { .. } => unreachable!(),
        }
    }
    assert_eq!(selector.district, "Ancón");
    assert_eq!(selector.code, "T-0007");
}

#[test]
fn edit_mode_district_change_keeps_code_and_skips_lookup() {
    let (mut selector, _) = LocationSelector::for_existing(7, "Lima", "Lima", "Ancón", "T-0007");
    assert!(selector.select_district("Lima").is_none());
    assert_eq!(selector.code, "T-0007");
}
