//! Systems: named per-entity behaviors gated by required components.
//!
//! A [`System`] holds an ordered list of required [`ComponentKind`]s and a
//! logic closure. Each frame the scene calls [`System::run`], which visits
//! every entity in the scene's order and invokes the logic for those carrying
//! all required kinds.
//!
//! Logic returns a [`Result`]. The first error stops the run and is returned
//! wrapped in [`EngineError::SystemFault`]; entities after the failing one are
//! not visited and nothing already written is rolled back.

use smallvec::SmallVec;

use super::component::ComponentKind;
use super::entity::Entity;
use crate::error::{EngineError, Result};
use crate::resources::surface::RenderSurface;

/// Per-entity system logic: `(entity, delta_ms, surface)`.
pub type SystemLogic = Box<dyn FnMut(&mut Entity, f64, &mut dyn RenderSurface) -> Result<()>>;

pub struct System {
    name: String,
    required: SmallVec<[ComponentKind; 4]>,
    logic: Option<SystemLogic>,
    warned_missing_logic: bool,
}

impl System {
    /// A system without logic. Attach it with [`with_logic`](Self::with_logic).
    pub fn new(name: impl Into<String>, required: impl IntoIterator<Item = ComponentKind>) -> Self {
        Self {
            name: name.into(),
            required: required.into_iter().collect(),
            logic: None,
            warned_missing_logic: false,
        }
    }

    pub fn with_logic(
        mut self,
        logic: impl FnMut(&mut Entity, f64, &mut dyn RenderSurface) -> Result<()> + 'static,
    ) -> Self {
        self.set_logic(logic);
        self
    }

    pub fn set_logic(
        &mut self,
        logic: impl FnMut(&mut Entity, f64, &mut dyn RenderSurface) -> Result<()> + 'static,
    ) {
        self.logic = Some(Box::new(logic));
        self.warned_missing_logic = false;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn required(&self) -> &[ComponentKind] {
        &self.required
    }

    pub fn has_logic(&self) -> bool {
        self.logic.is_some()
    }

    /// True if the entity carries every required kind.
    pub fn applies_to(&self, entity: &Entity) -> bool {
        self.required.iter().all(|kind| entity.has(*kind))
    }

    /// Run the logic over every qualifying entity.
    ///
    /// Returns how many entities the logic was invoked for. A system without
    /// logic logs a warning (once) and processes nothing.
    pub fn run<'a>(
        &mut self,
        entities: impl IntoIterator<Item = &'a mut Entity>,
        delta_ms: f64,
        surface: &mut dyn RenderSurface,
    ) -> Result<usize> {
        let Some(logic) = self.logic.as_mut() else {
            if !self.warned_missing_logic {
                log::warn!("system {:?} has no logic assigned, skipping", self.name);
                self.warned_missing_logic = true;
            }
            return Ok(0);
        };

        let mut invoked = 0;
        for entity in entities {
            if !self.required.iter().all(|kind| entity.has(*kind)) {
                continue;
            }
            logic(&mut *entity, delta_ms, &mut *surface).map_err(|e| EngineError::SystemFault {
                system: self.name.clone(),
                entity: entity.id().raw(),
                reason: Box::new(e),
            })?;
            invoked += 1;
        }
        Ok(invoked)
    }
}

impl std::fmt::Debug for System {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("System")
            .field("name", &self.name)
            .field("required", &self.required)
            .field("has_logic", &self.logic.is_some())
            .finish()
    }
}
