//! List view-model: a paged collection with edit and delete row actions.

use std::marker::PhantomData;

use contracts::shared::pagination::{Collection, Listed};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_utils::with_query;
use crate::shared::form::FormInputs;
use crate::shared::http::ApiError;
use crate::shared::pagination::PageState;
use crate::shared::scheduler::{PendingTask, RELOAD_DELAY};
use crate::shared::services::ConsoleServices;
use crate::shared::url_template::UrlTemplate;

/// Entity whose detail record fills an edit form.
pub trait EditableEntity: Listed + Clone + Send + Sync + 'static {
    /// Named control values for the edit form.
    fn form_values(&self) -> FormInputs;
}

/// Edit-form state shared by a list and its edit modal.
///
/// `selected_id` is the row being edited; the detail and update URL is
/// always built from it.
#[derive(Clone)]
pub struct EntityEditor<E> {
    pub selected_id: RwSignal<Option<String>>,
    pub values: RwSignal<FormInputs>,
    detail: UrlTemplate,
    services: ConsoleServices,
    _entity: PhantomData<fn() -> E>,
}

impl<E: EditableEntity> EntityEditor<E> {
    pub fn new(services: ConsoleServices, detail: UrlTemplate) -> Self {
        Self {
            selected_id: RwSignal::new(None),
            values: RwSignal::new(FormInputs::new()),
            detail,
            services,
            _entity: PhantomData,
        }
    }

    /// Detail/update URL of the selected entity.
    pub fn target_url(&self) -> Option<String> {
        self.selected_id
            .get_untracked()
            .map(|id| self.detail.build(&id))
    }

    /// Reactive variant of [`EntityEditor::target_url`].
    pub fn tracked_target_url(&self) -> Option<String> {
        self.selected_id.get().map(|id| self.detail.build(&id))
    }

    /// Select `id` and fill the form from its detail record. The form is
    /// emptied first; a failed fetch drops the selection again.
    pub async fn open(&self, id: &str) {
        self.selected_id.set(Some(id.to_string()));
        self.values.set(FormInputs::new());
        let url = self.detail.build(id);
        let result = match self.services.http.get(&url).await {
            Ok(body) => serde_json::from_value::<E>(body).map_err(ApiError::from),
            Err(err) => Err(err),
        };
        match result {
            Ok(entity) => self.values.set(entity.form_values()),
            Err(err) => {
                self.services
                    .notify_error(&format!("loading {} failed", url), &err);
                if self.selected_id.get_untracked().as_deref() == Some(id) {
                    self.close();
                }
            }
        }
    }

    pub fn close(&self) {
        self.selected_id.set(None);
        self.values.set(FormInputs::new());
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteMessages {
    /// Confirmation prompt.
    pub confirm: String,
    pub done: String,
}

#[derive(Clone)]
pub struct ListVm<E: EditableEntity> {
    pub state: RwSignal<PageState<E>>,
    pub editor: EntityEditor<E>,
    collection: String,
    delete: UrlTemplate,
    delete_messages: DeleteMessages,
    services: ConsoleServices,
    pending_reload: PendingTask,
}

impl<E: EditableEntity> ListVm<E> {
    pub fn new(
        services: ConsoleServices,
        collection: String,
        delete: UrlTemplate,
        delete_messages: DeleteMessages,
        editor: EntityEditor<E>,
    ) -> Self {
        Self {
            state: RwSignal::new(PageState::default()),
            editor,
            collection,
            delete,
            delete_messages,
            services,
            pending_reload: PendingTask::new(),
        }
    }

    pub fn total_pages(&self) -> u64 {
        self.state.with(PageState::total_pages)
    }

    /// Fetch the current page. On failure the previous page stays in place.
    pub async fn load_data(&self) {
        let page = self.state.with_untracked(|state| state.current_page);
        self.load_page(page).await;
    }

    pub async fn next_page(&self) {
        if !self.state.with_untracked(PageState::has_next) {
            return;
        }
        let page = self.state.with_untracked(|state| state.current_page + 1);
        self.load_page(page).await;
    }

    pub async fn previous_page(&self) {
        if !self.state.with_untracked(PageState::has_previous) {
            return;
        }
        let page = self.state.with_untracked(|state| state.current_page - 1);
        self.load_page(page).await;
    }

    /// Move to `page` only once it has been fetched.
    async fn load_page(&self, page: u64) {
        let query = self.state.with_untracked(|state| state.query_for(page));
        let result = match with_query(&self.collection, &query) {
            Ok(url) => fetch_page::<E>(&self.services, &url).await,
            Err(err) => Err(err),
        };
        match result {
            Ok(collection) => self.state.update(|state| {
                state.current_page = page;
                state.apply(collection);
            }),
            Err(err) => self
                .services
                .notify_error(&format!("loading {} failed", self.collection), &err),
        }
    }

    pub async fn edit(&self, id: &str) {
        self.editor.open(id).await;
    }

    /// Delete after confirmation, then reload the page after [`RELOAD_DELAY`].
    pub async fn delete(&self, id: &str) {
        if !self.services.browser.confirm(&self.delete_messages.confirm) {
            log::debug!("delete of {} declined", id);
            return;
        }
        let url = self.delete.build(id);
        match self.services.http.delete(&url).await {
            Ok(_) => {
                self.services.notify(&self.delete_messages.done);
                self.pending_reload
                    .replace(self.services.schedule_reload(RELOAD_DELAY));
            }
            Err(err) => self
                .services
                .notify_error(&format!("delete {} failed", url), &err),
        }
    }

    pub fn teardown(&self) {
        self.pending_reload.cancel();
    }

    pub fn load_data_action(&self) {
        let vm = self.clone();
        spawn_local(async move { vm.load_data().await });
    }

    pub fn load_next_page_action(&self) {
        let vm = self.clone();
        spawn_local(async move { vm.next_page().await });
    }

    pub fn load_previous_page_action(&self) {
        let vm = self.clone();
        spawn_local(async move { vm.previous_page().await });
    }

    pub fn edit_action(&self, id: String) {
        let vm = self.clone();
        spawn_local(async move { vm.edit(&id).await });
    }

    pub fn delete_action(&self, id: String) {
        let vm = self.clone();
        spawn_local(async move { vm.delete(&id).await });
    }
}

/// GET one page of `E` from a fully built collection URL.
pub async fn fetch_page<E: Listed>(
    services: &ConsoleServices,
    url: &str,
) -> Result<Collection<E>, ApiError> {
    let body = services.http.get(url).await?;
    Ok(Collection::from_envelope(body)?)
}
