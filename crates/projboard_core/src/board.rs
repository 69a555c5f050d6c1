//! Board wiring: one store, two bucket targets and the project form.
//!
//! # Responsibility
//! - Own the single store instance and hand it out explicitly.
//! - Route inbound gesture and form events to the drag protocol and form.
//!
//! # Invariants
//! - Exactly one `ItemStore` per board; no process-wide store exists.
//! - Events are handled one at a time, each to completion.

use crate::config::{BoardConfig, ConfigError};
use crate::drag::session::{DragSession, DropOutcome};
use crate::drag::target::DropTarget;
use crate::model::item::{ItemId, ItemStatus};
use crate::service::project_form::{FormError, ProjectForm};
use crate::store::item_store::ItemStore;
use crate::view::bucket_list::BucketList;

/// Event raised by a presentation adapter.
#[derive(Debug)]
pub enum BoardEvent {
    /// A drag gesture started on an item.
    GestureStart { item_id: ItemId },
    /// A gesture ended; `over` names the bucket target under the pointer.
    GestureEnd {
        session: DragSession,
        over: Option<ItemStatus>,
    },
    FormSubmit {
        title: String,
        description: String,
        people: String,
    },
}

/// Result of handling one `BoardEvent`.
#[derive(Debug)]
pub enum EventOutcome {
    /// Carrier for the new gesture; hand it back with `GestureEnd`.
    DragStarted(DragSession),
    /// Gesture started on an unknown item; nothing to carry.
    DragIgnored,
    Drop(DropOutcome),
    Submitted(Result<ItemId, FormError>),
}

/// Explicitly constructed board state.
#[derive(Debug)]
pub struct Board {
    store: ItemStore,
    active_target: DropTarget,
    finished_target: DropTarget,
    form: ProjectForm,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            store: ItemStore::new(),
            active_target: DropTarget::new(ItemStatus::Active),
            finished_target: DropTarget::new(ItemStatus::Finished),
            form: ProjectForm::default(),
        }
    }
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board whose form uses the configured rules.
    ///
    /// # Errors
    /// Returns the first `ConfigError` reported by `BoardConfig::validate`.
    pub fn from_config(config: &BoardConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            form: ProjectForm::new(config.form.clone()),
            ..Self::default()
        })
    }

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ItemStore {
        &mut self.store
    }

    pub fn form(&self) -> &ProjectForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ProjectForm {
        &mut self.form
    }

    pub fn target(&self, bucket: ItemStatus) -> &DropTarget {
        match bucket {
            ItemStatus::Active => &self.active_target,
            ItemStatus::Finished => &self.finished_target,
        }
    }

    pub fn target_mut(&mut self, bucket: ItemStatus) -> &mut DropTarget {
        match bucket {
            ItemStatus::Active => &mut self.active_target,
            ItemStatus::Finished => &mut self.finished_target,
        }
    }

    /// Subscribes a live list for `bucket`.
    pub fn attach_list(&self, bucket: ItemStatus) -> BucketList {
        BucketList::attach(&self.store, bucket)
    }

    pub fn start_drag(&self, item_id: ItemId) -> Option<DragSession> {
        DragSession::start(&self.store, item_id)
    }

    pub fn end_drag(&mut self, session: DragSession, over: Option<ItemStatus>) -> DropOutcome {
        match over {
            Some(bucket) => {
                let target = match bucket {
                    ItemStatus::Active => &mut self.active_target,
                    ItemStatus::Finished => &mut self.finished_target,
                };
                session.drop_on(target, &mut self.store)
            }
            None => session.finish(None, &mut self.store),
        }
    }

    /// Fills the form buffers and submits them.
    pub fn submit(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: impl Into<String>,
    ) -> Result<ItemId, FormError> {
        self.form.set_title(title);
        self.form.set_description(description);
        self.form.set_people(people);
        self.form.submit(&mut self.store)
    }

    pub fn handle(&mut self, event: BoardEvent) -> EventOutcome {
        match event {
            BoardEvent::GestureStart { item_id } => match self.start_drag(item_id) {
                Some(session) => EventOutcome::DragStarted(session),
                None => EventOutcome::DragIgnored,
            },
            BoardEvent::GestureEnd { session, over } => {
                EventOutcome::Drop(self.end_drag(session, over))
            }
            BoardEvent::FormSubmit {
                title,
                description,
                people,
            } => EventOutcome::Submitted(self.submit(title, description, people)),
        }
    }
}
