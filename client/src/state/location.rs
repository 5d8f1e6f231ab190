//! Cascading department → province → district selector for tambo forms.
//!
//! DESIGN
//! ======
//! The selector is an explicit state machine. Selection events mutate the
//! chosen triple synchronously and hand back the lookup the caller must run.
//! Every lookup carries an epoch; a resolution is applied only when its epoch
//! is still the latest issued for that lookup kind, so a slow response for an
//! older selection can never overwrite a newer one.

#[cfg(test)]
#[path = "location_test.rs"]
mod location_test;

/// Observable phase of the selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LocationPhase {
    #[default]
    Idle,
    LoadingProvinces,
    LoadingDistricts,
    LoadingCode,
    Ready,
}

/// A lookup the owning view must perform and report back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LookupRequest {
    Provinces {
        epoch: u64,
        department: String,
    },
    Districts {
        epoch: u64,
        department: String,
        province: String,
    },
    Code {
        epoch: u64,
        department: String,
        province: String,
        district: String,
    },
}

impl LookupRequest {
    #[must_use]
    pub fn epoch(&self) -> u64 {
        match self {
            Self::Provinces { epoch, .. } | Self::Districts { epoch, .. } | Self::Code { epoch, .. } => *epoch,
        }
    }
}

/// Location triple plus option lists and the derived station code.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LocationSelector {
    pub departments: Vec<String>,
    pub provinces: Vec<String>,
    pub districts: Vec<String>,
    pub department: String,
    pub province: String,
    pub district: String,
    /// Server-derived station code; read-only in the UI.
    pub code: String,
    /// Present when editing an existing station.
    pub station_id: Option<i64>,
    next_epoch: u64,
    pending_provinces: Option<u64>,
    pending_districts: Option<u64>,
    pending_code: Option<u64>,
}

impl LocationSelector {
    /// Fresh selector for create mode.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from a stored station. The triple and code are taken verbatim;
    /// the returned lookups only refresh the option lists.
    #[must_use]
    pub fn for_existing(
        station_id: i64,
        department: &str,
        province: &str,
        district: &str,
        code: &str,
    ) -> (Self, Vec<LookupRequest>) {
        let mut selector = Self {
            department: department.to_owned(),
            province: province.to_owned(),
            district: district.to_owned(),
            code: code.to_owned(),
            station_id: Some(station_id),
            ..Self::default()
        };
        let mut requests = Vec::new();
        if !department.is_empty() {
            let epoch = selector.bump();
            selector.pending_provinces = Some(epoch);
            requests.push(LookupRequest::Provinces { epoch, department: department.to_owned() });
            if !province.is_empty() {
                let epoch = selector.bump();
                selector.pending_districts = Some(epoch);
                requests.push(LookupRequest::Districts {
                    epoch,
                    department: department.to_owned(),
                    province: province.to_owned(),
                });
            }
        }
        (selector, requests)
    }

    fn bump(&mut self) -> u64 {
        self.next_epoch += 1;
        self.next_epoch
    }

    #[must_use]
    pub fn is_create(&self) -> bool {
        self.station_id.is_none()
    }

    /// Current phase, derived from outstanding lookups.
    #[must_use]
    pub fn phase(&self) -> LocationPhase {
        if self.pending_code.is_some() {
            LocationPhase::LoadingCode
        } else if self.pending_districts.is_some() {
            LocationPhase::LoadingDistricts
        } else if self.pending_provinces.is_some() {
            LocationPhase::LoadingProvinces
        } else if self.is_complete() {
            LocationPhase::Ready
        } else {
            LocationPhase::Idle
        }
    }

    /// All three levels chosen.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.department.is_empty() && !self.province.is_empty() && !self.district.is_empty()
    }

    /// `true` while a code lookup is in flight; submission must wait.
    #[must_use]
    pub fn code_pending(&self) -> bool {
        self.pending_code.is_some()
    }

    /// Choose a department. Province, district and (in create mode) code are
    /// reset before any lookup resolves.
    pub fn select_department(&mut self, department: &str) -> Option<LookupRequest> {
        self.department = department.to_owned();
        self.province.clear();
        self.district.clear();
        self.districts.clear();
        self.pending_districts = None;
        self.invalidate_code();
        if department.is_empty() {
            self.pending_provinces = None;
            return None;
        }
        let epoch = self.bump();
        self.pending_provinces = Some(epoch);
        Some(LookupRequest::Provinces { epoch, department: department.to_owned() })
    }

    /// Choose a province. District and (in create mode) code are reset.
    pub fn select_province(&mut self, province: &str) -> Option<LookupRequest> {
        self.province = province.to_owned();
        self.district.clear();
        self.invalidate_code();
        if province.is_empty() || self.department.is_empty() {
            self.pending_districts = None;
            return None;
        }
        let epoch = self.bump();
        self.pending_districts = Some(epoch);
        Some(LookupRequest::Districts {
            epoch,
            department: self.department.clone(),
            province: province.to_owned(),
        })
    }

    /// Choose a district. In create mode with a full triple this requests the
    /// next station code.
    pub fn select_district(&mut self, district: &str) -> Option<LookupRequest> {
        self.district = district.to_owned();
        self.invalidate_code();
        if !self.is_create() || !self.is_complete() {
            return None;
        }
        let epoch = self.bump();
        self.pending_code = Some(epoch);
        Some(LookupRequest::Code {
            epoch,
            department: self.department.clone(),
            province: self.province.clone(),
            district: self.district.clone(),
        })
    }

    fn invalidate_code(&mut self) {
        self.pending_code = None;
        if self.is_create() {
            self.code.clear();
        }
    }

    /// Department list arrived (fetched once on modal open).
    pub fn departments_loaded(&mut self, result: Result<Vec<String>, String>) {
        match result {
            Ok(list) => self.departments = list,
            Err(e) => log::warn!("department lookup failed: {e}"),
        }
    }

    /// Apply a province lookup result. Returns `false` for stale responses.
    pub fn provinces_loaded(&mut self, epoch: u64, result: Result<Vec<String>, String>) -> bool {
        if self.pending_provinces != Some(epoch) {
            return false;
        }
        self.pending_provinces = None;
        match result {
            Ok(list) => self.provinces = list,
            Err(e) => log::warn!("province lookup failed: {e}"),
        }
        true
    }

    /// Apply a district lookup result. Returns `false` for stale responses.
    pub fn districts_loaded(&mut self, epoch: u64, result: Result<Vec<String>, String>) -> bool {
        if self.pending_districts != Some(epoch) {
            return false;
        }
        self.pending_districts = None;
        match result {
            Ok(list) => self.districts = list,
            Err(e) => log::warn!("district lookup failed: {e}"),
        }
        true
    }

    /// Apply a code lookup result. Returns `false` for stale responses.
    pub fn code_loaded(&mut self, epoch: u64, result: Result<String, String>) -> bool {
        if self.pending_code != Some(epoch) {
            return false;
        }
        self.pending_code = None;
        match result {
            Ok(code) => self.code = code,
            Err(e) => log::warn!("station code lookup failed: {e}"),
        }
        true
    }
}
