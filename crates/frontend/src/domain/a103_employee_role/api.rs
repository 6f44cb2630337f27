use async_trait::async_trait;
use contracts::domain::a103_employee_role::{
    enrich, PersonaRol, PersonaRolDetalle, PersonaRolRequest, ENTITY_METADATA,
};
use contracts::shared::api_error::ErrorMessages;

use crate::domain::a101_employee::api::PersonaApi;
use crate::domain::a102_access_role::api::RolAccesoApi;
use crate::shared::crud::{options, CrudSource, Loaded};
use crate::shared::rest::{ResourceDef, RestResource};

pub struct PersonaRolApi;

impl ResourceDef for PersonaRolApi {
    type Response = PersonaRol;
    type Request = PersonaRolRequest;
    const PATH: &'static str = "/persona-roles";
    const MESSAGES: ErrorMessages = ENTITY_METADATA.messages;
    const RETRIES: u32 = 2;
}

/// Asignaciones con empleado y rol resueltos
#[derive(Clone, Copy, Default)]
pub struct PersonaRolSource;

#[async_trait(?Send)]
impl CrudSource for PersonaRolSource {
    type Entity = PersonaRolDetalle;
    type Resource = PersonaRolApi;

    async fn load(&self) -> Result<Loaded<PersonaRolDetalle>, String> {
        let persona_rol_api = RestResource::<PersonaRolApi>::new();
        let persona_api = RestResource::<PersonaApi>::new();
        let rol_acceso_api = RestResource::<RolAccesoApi>::new();
        let (asignaciones, personas, roles) = futures::try_join!(
            persona_rol_api.find_all(),
            persona_api.find_all(),
            rol_acceso_api.find_all(),
        )?;

        Ok(Loaded::rows(enrich(&asignaciones, &personas, &roles))
            .with_options(
                "personaId",
                options(&personas, |p| p.id, |p| format!("{} - {}", p.nombre, p.cedula)),
            )
            .with_options(
                "rolId",
                options(&roles, |r| r.id, |r| r.nombre.clone()),
            ))
    }
}
