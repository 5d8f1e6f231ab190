//! Wire DTOs for the outreach REST backend.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Fields the backend may
//! omit are `Option<T>` with `#[serde(default)]` so partial payloads decode
//! instead of failing the whole list.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::state::channels::{
    ChannelSet, ChannelUniverse, deserialize_alert_channels, deserialize_announcement_channels,
};

/// Numeric-or-name enum representation accepted from the backend.
#[derive(Deserialize)]
#[serde(untagged)]
pub enum IntOrName {
    Int(i64),
    Name(String),
}

fn no_announcement_channels() -> ChannelSet {
    ChannelSet::none(ChannelUniverse::Announcement)
}

fn no_alert_channels() -> ChannelSet {
    ChannelSet::none(ChannelUniverse::Alert)
}

// =============================================================
// Users
// =============================================================

/// Collaborator role.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Administrador,
    #[default]
    Gestor,
    Gestante,
    Familiar,
    #[serde(rename = "Niño")]
    Nino,
}

impl Role {
    pub const ALL: [Role; 5] = [Self::Administrador, Self::Gestor, Self::Gestante, Self::Familiar, Self::Nino];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Administrador => "Administrador",
            Self::Gestor => "Gestor",
            Self::Gestante => "Gestante",
            Self::Familiar => "Familiar",
            Self::Nino => "Niño",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.label() == label)
    }

    /// Roles that may represent a station or manage assignments.
    #[must_use]
    pub const fn is_staff(self) -> bool {
        matches!(self, Self::Administrador | Self::Gestor)
    }
}

/// Collaborator record (`/Users`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name_p: String,
    #[serde(default)]
    pub last_name_m: String,
    #[serde(default)]
    pub document_number: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password_hash: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub birth_date: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firebase_token: Option<String>,
}

impl User {
    /// "First LastP LastM", skipping empty parts.
    #[must_use]
    pub fn full_name(&self) -> String {
        join_name(&self.first_name, &self.last_name_p, &self.last_name_m)
    }
}

/// Space-join name parts, skipping blanks.
#[must_use]
pub fn join_name(first: &str, last_p: &str, last_m: &str) -> String {
    [first, last_p, last_m]
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Names nested inside visit/patient payloads.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonName {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name_p: String,
    #[serde(default)]
    pub last_name_m: String,
}

impl PersonName {
    #[must_use]
    pub fn full_name(&self) -> String {
        join_name(&self.first_name, &self.last_name_p, &self.last_name_m)
    }
}

/// `POST /Users/login` body.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub dni: String,
    pub password: String,
}

/// `POST /Users/login` response: the user record plus an optional bearer token.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct LoginResponse {
    #[serde(flatten)]
    pub user: User,
    #[serde(default)]
    pub token: Option<String>,
}

/// `POST /Users/dni` national-id lookup result.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DniLookup {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name_p: String,
    #[serde(default)]
    pub last_name_m: String,
}

// =============================================================
// Stations
// =============================================================

/// Station kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TamboTipo {
    #[default]
    Temporal,
    Movil,
    Permanente,
}

impl TamboTipo {
    pub const ALL: [TamboTipo; 3] = [Self::Temporal, Self::Movil, Self::Permanente];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Temporal => "Temporal",
            Self::Movil => "Movil",
            Self::Permanente => "Permanente",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }
}

/// Field station (`/Tambos`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tambo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub departamento: String,
    #[serde(default)]
    pub provincia: String,
    #[serde(default)]
    pub distrito: String,
    #[serde(default)]
    pub direccion: String,
    #[serde(default)]
    pub referencia: Option<String>,
    #[serde(default)]
    pub horario_atencion: Option<String>,
    #[serde(default)]
    pub tipo: TamboTipo,
    #[serde(default)]
    pub representante: String,
    #[serde(default)]
    pub documento_representante: String,
    #[serde(default)]
    pub telefono: String,
    #[serde(default)]
    pub estado: bool,
}

// =============================================================
// Patients and contacts
// =============================================================

/// Patient record (`/Pacientes`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paciente {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub user_id: i64,
    #[serde(default)]
    pub tiene_anemia: bool,
    #[serde(default)]
    pub nombre_completo: Option<String>,
    #[serde(default, alias = "user")]
    pub usuario: Option<PersonName>,
}

impl Paciente {
    /// Display name from `nombreCompleto`, else the nested user, else the id.
    #[must_use]
    pub fn display_name(&self) -> String {
        if let Some(name) = self.nombre_completo.as_deref().filter(|n| !n.trim().is_empty()) {
            return name.trim().to_owned();
        }
        match &self.usuario {
            Some(u) if !u.full_name().is_empty() => u.full_name(),
            _ => format!("Paciente #{}", self.id),
        }
    }
}

/// `POST`/`PUT /Pacientes` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PacientePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub user_id: i64,
    pub tiene_anemia: bool,
}

/// `{id, nombre}` option rows used by several selects.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedOption {
    pub id: i64,
    #[serde(default)]
    pub nombre: String,
}

/// Caregiver contact (`/Contactos`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contacto {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub tipo_documento: String,
    #[serde(default)]
    pub documento: String,
    #[serde(default)]
    pub telefono: String,
    #[serde(default)]
    pub apellido_paterno: String,
    #[serde(default)]
    pub apellido_materno: String,
    #[serde(default)]
    pub nombre_completo: String,
    #[serde(default)]
    pub fecha_nacimiento: String,
    #[serde(default)]
    pub genero: String,
    #[serde(default)]
    pub direccion: String,
    #[serde(default)]
    pub parentesco: String,
    #[serde(default)]
    pub notificaciones: String,
    #[serde(default)]
    pub paciente_id: i64,
    #[serde(default, skip_serializing)]
    pub paciente_nombre: Option<String>,
}

// =============================================================
// Assignments
// =============================================================

/// Assignment row from `/Asignaciones/extendidas`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asignacion {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub gestor_id: i64,
    #[serde(default)]
    pub tambo_id: i64,
    #[serde(default)]
    pub fecha_asignacion: String,
    #[serde(default)]
    pub departamento: String,
    #[serde(default)]
    pub provincia: String,
    #[serde(default)]
    pub distrito: String,
    #[serde(default)]
    pub centro_poblado: Option<String>,
    #[serde(default)]
    pub estado: bool,
    #[serde(default)]
    pub gestor_nombre: Option<String>,
    #[serde(default)]
    pub tambo_nombre: Option<String>,
}

/// `POST`/`PUT /Asignaciones` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AsignacionPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub gestor_id: i64,
    pub tambo_id: i64,
    pub centro_poblado: String,
    pub estado: bool,
    pub departamento: String,
    pub provincia: String,
    pub distrito: String,
    pub fecha_asignacion: String,
}

// =============================================================
// Visits
// =============================================================

/// Patient wrapper nested in a visit.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitaPaciente {
    #[serde(default)]
    pub user: Option<PersonName>,
}

/// Home visit (`/VisitaDomiciliaria`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visita {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub paciente_id: i64,
    #[serde(default)]
    pub gestor_id: i64,
    #[serde(default)]
    pub asignacion_id: Option<i64>,
    #[serde(default)]
    pub fecha_visita: String,
    #[serde(default)]
    pub observacion: String,
    #[serde(default)]
    pub altura: Option<f64>,
    #[serde(default)]
    pub peso: Option<f64>,
    #[serde(default)]
    pub tiene_agua: bool,
    #[serde(default)]
    pub tiene_luz: bool,
    #[serde(default)]
    pub tiene_internet: bool,
    #[serde(default)]
    pub latitud: Option<f64>,
    #[serde(default)]
    pub longitud: Option<f64>,
    #[serde(default)]
    pub ubicacion_confirmada: bool,
    #[serde(default)]
    pub registrado_offline: bool,
    #[serde(default)]
    pub fecha_registro: String,
    #[serde(default)]
    pub paciente: Option<VisitaPaciente>,
    #[serde(default)]
    pub gestor: Option<PersonName>,
}

impl Visita {
    #[must_use]
    pub fn paciente_nombre(&self) -> String {
        self.paciente
            .as_ref()
            .and_then(|p| p.user.as_ref())
            .map_or_else(|| format!("#{}", self.paciente_id), PersonName::full_name)
    }

    #[must_use]
    pub fn gestor_nombre(&self) -> String {
        self.gestor
            .as_ref()
            .map_or_else(|| format!("#{}", self.gestor_id), PersonName::full_name)
    }
}

/// Visit body for create/update and the offline queue.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitaPayload {
    /// Set when the payload edits an existing visit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub paciente_id: i64,
    pub gestor_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asignacion_id: Option<i64>,
    pub fecha_visita: String,
    #[serde(default)]
    pub observacion: String,
    #[serde(default)]
    pub altura: Option<f64>,
    #[serde(default)]
    pub peso: Option<f64>,
    #[serde(default)]
    pub tiene_agua: bool,
    #[serde(default)]
    pub tiene_luz: bool,
    #[serde(default)]
    pub tiene_internet: bool,
    #[serde(default)]
    pub latitud: Option<f64>,
    #[serde(default)]
    pub longitud: Option<f64>,
    #[serde(default)]
    pub ubicacion_confirmada: bool,
}

// =============================================================
// Announcements
// =============================================================

/// Announcement audience.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "IntOrName", into = "u8")]
pub enum Destinatario {
    #[default]
    Nino,
    Gestante,
    Administrador,
    Gestor,
    Todos,
}

impl Destinatario {
    pub const ALL: [Destinatario; 5] = [Self::Nino, Self::Gestante, Self::Administrador, Self::Gestor, Self::Todos];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Nino => "Niño",
            Self::Gestante => "Gestante",
            Self::Administrador => "Administrador",
            Self::Gestor => "Gestor",
            Self::Todos => "Todos",
        }
    }
}

impl From<Destinatario> for u8 {
    fn from(d: Destinatario) -> Self {
        match d {
            Destinatario::Nino => 0,
            Destinatario::Gestante => 1,
            Destinatario::Administrador => 2,
            Destinatario::Gestor => 3,
            Destinatario::Todos => 4,
        }
    }
}

impl TryFrom<IntOrName> for Destinatario {
    type Error = String;

    fn try_from(value: IntOrName) -> Result<Self, Self::Error> {
        match value {
            IntOrName::Int(n) => Self::ALL
                .into_iter()
                .find(|d| i64::from(u8::from(*d)) == n)
                .ok_or_else(|| format!("unknown destinatario {n}")),
            IntOrName::Name(s) => Self::ALL
                .into_iter()
                .find(|d| d.label() == s || (s == "Nino" && *d == Self::Nino))
                .ok_or_else(|| format!("unknown destinatario {s:?}")),
        }
    }
}

/// Announcement content category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "IntOrName", into = "u8")]
pub enum TipoContenido {
    #[default]
    Informativo,
    Educativo,
    Preventivo,
}

impl TipoContenido {
    pub const ALL: [TipoContenido; 3] = [Self::Informativo, Self::Educativo, Self::Preventivo];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Informativo => "Informativo",
            Self::Educativo => "Educativo",
            Self::Preventivo => "Preventivo",
        }
    }
}

impl From<TipoContenido> for u8 {
    fn from(t: TipoContenido) -> Self {
        match t {
            TipoContenido::Informativo => 0,
            TipoContenido::Educativo => 1,
            TipoContenido::Preventivo => 2,
        }
    }
}

impl TryFrom<IntOrName> for TipoContenido {
    type Error = String;

    fn try_from(value: IntOrName) -> Result<Self, Self::Error> {
        match value {
            IntOrName::Int(n) => Self::ALL
                .into_iter()
                .find(|t| i64::from(u8::from(*t)) == n)
                .ok_or_else(|| format!("unknown tipoContenido {n}")),
            IntOrName::Name(s) => Self::ALL
                .into_iter()
                .find(|t| t.label() == s)
                .ok_or_else(|| format!("unknown tipoContenido {s:?}")),
        }
    }
}

/// Announcement (`/Comunicado`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comunicado {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub titulo: String,
    #[serde(default)]
    pub cuerpo: String,
    #[serde(default)]
    pub destinatario: Destinatario,
    #[serde(default)]
    pub fecha_inicio: String,
    #[serde(default)]
    pub fecha_fin: String,
    #[serde(default = "no_announcement_channels", deserialize_with = "deserialize_announcement_channels")]
    pub canal_envio: ChannelSet,
    #[serde(default)]
    pub tipo_contenido: Option<TipoContenido>,
    #[serde(default)]
    pub es_destacado: Option<bool>,
    #[serde(default)]
    pub es_programado: Option<bool>,
    #[serde(default, rename = "urlPDF")]
    pub url_pdf: Option<String>,
    #[serde(default)]
    pub imagen_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_creacion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eliminado: Option<bool>,
}

/// `POST /Comunicado/upload` response.
#[derive(Clone, Debug, Deserialize)]
pub struct UploadResponse {
    #[serde(alias = "URL", alias = "path")]
    pub url: String,
}

// =============================================================
// Alerts
// =============================================================

macro_rules! labelled_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $label)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$(Self::$variant),+];

            #[must_use]
            pub const fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }

            #[must_use]
            pub fn from_label(label: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|v| v.label() == label)
            }
        }
    };
}

labelled_enum!(
    /// Alert subject.
    AlertaTipo {
        Vacunacion => "Vacunacion",
        ControlMedico => "ControlMedico",
        SuplementoHierro => "SuplementoHierro",
        VisitaDomiciliaria => "VisitaDomiciliaria",
        Otro => "Otro",
    }
);

labelled_enum!(
    /// Audience category of an alert.
    AlertaCategoria {
        Nino => "Niño",
        Gestante => "Gestante",
        Todos => "Todos",
    }
);

labelled_enum!(
    PrioridadAlerta {
        Alta => "Alta",
        Media => "Media",
        Baja => "Baja",
    }
);

labelled_enum!(
    /// Repetition schedule of an alert.
    PeriodicidadAlerta {
        Unica => "Unica",
        Diaria => "Diaria",
        Semanal => "Semanal",
        Mensual => "Mensual",
    }
);

/// Patient alert (`/Alerta`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alerta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub paciente_id: i64,
    pub tipo: AlertaTipo,
    pub categoria: AlertaCategoria,
    #[serde(default)]
    pub mensaje: String,
    #[serde(default)]
    pub fecha_alerta: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_creacion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notificacion_enviada: Option<bool>,
    #[serde(default = "no_alert_channels", deserialize_with = "deserialize_alert_channels")]
    pub canal_envio: ChannelSet,
    #[serde(default)]
    pub prioridad: Option<PrioridadAlerta>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eliminada: Option<bool>,
    #[serde(default)]
    pub periodicidad: Option<PeriodicidadAlerta>,
    #[serde(default)]
    pub fecha_fin_repeticion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vista_previa: Option<String>,
    #[serde(default)]
    pub creado_por_user_id: i64,
}

// =============================================================
// Exports
// =============================================================

labelled_enum!(
    /// Dataset an export covers.
    TipoExportacion {
        Visitas => "Visitas",
        Pacientes => "Pacientes",
        Alertas => "Alertas",
        Asignaciones => "Asignaciones",
        Tambos => "Tambos",
        Usuarios => "Usuarios",
        Contactos => "Contactos",
        Comunicados => "Comunicados",
    }
);

/// Past export (`/exportacionhistorial`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportacionHistorial {
    pub id: i64,
    #[serde(default)]
    pub usuario_id: i64,
    #[serde(default)]
    pub tipo_exportacion: String,
    #[serde(default)]
    pub filtros_aplicados: Option<String>,
    #[serde(default)]
    pub fecha_exportacion: String,
    #[serde(default)]
    pub formato: String,
    #[serde(default)]
    pub estado: String,
    #[serde(default)]
    pub url_archivo: Option<String>,
    #[serde(default)]
    pub ip_cliente: Option<String>,
    #[serde(default)]
    pub navegador: Option<String>,
    #[serde(default)]
    pub tiempo_generacion_segundos: Option<f64>,
}

/// `GET /exportacionhistorial/usuario/{id}` envelope.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ExportHistoryResponse {
    #[serde(default)]
    pub historial: Vec<ExportacionHistorial>,
}

/// `POST /exportacionhistorial/generar-exportacion` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    pub usuario_id: i64,
    pub tipo_exportacion: TipoExportacion,
    pub filtros_aplicados: String,
    pub nombre_entidad: String,
    pub fecha_inicio: String,
    pub fecha_fin: String,
}

/// Generated-export response.
#[derive(Clone, Debug, Deserialize)]
pub struct ExportResult {
    #[serde(default)]
    pub qr: Option<String>,
    #[serde(default)]
    pub registro: Option<ExportacionHistorial>,
}

// =============================================================
// Reports
// =============================================================

/// Generic `{label, total}` bucket.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ResumenSimple {
    #[serde(default, alias = "rol", alias = "nombre")]
    pub label: String,
    #[serde(default)]
    pub total: f64,
}

/// Visits grouped by day, week or month.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct VisitaPorTiempo {
    #[serde(default)]
    pub fecha: String,
    #[serde(default)]
    pub total: f64,
}

/// Geolocated visit for the map report.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoordenadaVisita {
    pub latitud: f64,
    pub longitud: f64,
    #[serde(default)]
    pub fecha: String,
    #[serde(default)]
    pub confirmada: bool,
    #[serde(default)]
    pub paciente_id: i64,
}

/// Household services combination with its visit count.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiciosBasicos {
    #[serde(default)]
    pub tiene_agua: bool,
    #[serde(default)]
    pub tiene_luz: bool,
    #[serde(default)]
    pub tiene_internet: bool,
    #[serde(default)]
    pub total: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TopDistrito {
    #[serde(default)]
    pub distrito: String,
    #[serde(default)]
    pub total: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificacionUsuarios {
    #[serde(default)]
    pub total_usuarios: f64,
    #[serde(default)]
    pub verificados: f64,
    #[serde(default)]
    pub porcentaje: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TambosPorRegion {
    #[serde(default)]
    pub departamento: String,
    #[serde(default)]
    pub provincia: String,
    #[serde(default)]
    pub distrito: String,
    #[serde(default)]
    pub total: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TambosPorTipo {
    #[serde(default)]
    pub tipo: String,
    #[serde(default)]
    pub total: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AnemiaPorDistrito {
    #[serde(default)]
    pub distrito: String,
    #[serde(default)]
    pub total: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PacientesPorMes {
    #[serde(default)]
    pub mes: u32,
    #[serde(default)]
    pub total: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AsignacionesPorGestor {
    #[serde(default)]
    pub gestor: String,
    #[serde(default)]
    pub total_asignaciones: f64,
}

// =============================================================
// Runtime configuration and push
// =============================================================

/// Firebase web-app configuration served at `/config.json`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirebaseWebConfig {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    pub storage_bucket: String,
    pub messaging_sender_id: String,
    pub app_id: String,
}

/// Public runtime configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeConfig {
    pub firebase: FirebaseWebConfig,
    #[serde(default)]
    pub vapid_key: String,
}

impl RuntimeConfig {
    /// Push is usable only with a project id and a VAPID key.
    #[must_use]
    pub fn push_enabled(&self) -> bool {
        !self.firebase.project_id.is_empty() && !self.vapid_key.is_empty()
    }
}

/// Foreground push message as delivered by Firebase messaging.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct PushMessage {
    #[serde(default)]
    pub notification: Option<PushNotification>,
    #[serde(default)]
    pub data: Option<std::collections::BTreeMap<String, String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct PushNotification {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

impl PushMessage {
    /// Title and body, falling back to data fields, `None` without a title.
    #[must_use]
    pub fn title_and_body(&self) -> Option<(String, String)> {
        let from_notification = self
            .notification
            .as_ref()
            .and_then(|n| n.title.clone().map(|t| (t, n.body.clone().unwrap_or_default())));
        from_notification.or_else(|| {
            let data = self.data.as_ref()?;
            let title = data.get("title")?.clone();
            Some((title, data.get("body").cloned().unwrap_or_default()))
        })
    }
}
