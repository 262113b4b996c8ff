//! Teams list, editor, member picker and add/edit form wiring.

use contracts::shared::pagination::ListQuery;
use contracts::system::teams::Team;
use contracts::system::users::User;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_utils::with_query;
use crate::shared::config::{required, template, ConfigError};
use crate::shared::form::FormInputs;
use crate::shared::form_submit::{AfterSuccess, FormSubmitVm, PageForm, SubmitMethod, SuccessMessage};
use crate::shared::list_vm::{fetch_page, DeleteMessages, EditableEntity, EntityEditor, ListVm};
use crate::shared::scheduler::RELOAD_DELAY;
use crate::shared::services::ConsoleServices;

pub type TeamEditor = EntityEditor<Team>;
pub type TeamsListVm = ListVm<Team>;

/// Upper bound for the member picker's single page of users.
pub const MEMBER_PICKER_LIMIT: u64 = 10_000;

impl EditableEntity for Team {
    fn form_values(&self) -> FormInputs {
        let mut values = FormInputs::new();
        values.set("name", self.name.as_str());
        values.set("slug", self.slug.as_str());
        values.set("description", self.description.as_str());
        values.set_multiple("members", self.members.clone());
        values
    }
}

pub fn team_editor(services: &ConsoleServices) -> Result<TeamEditor, ConfigError> {
    let detail = template(&services.config.endpoints.team_endpoint, "team_endpoint")?;
    Ok(EntityEditor::new(services.clone(), detail))
}

/// `fallback` is the collection URL carried by the list root element.
pub fn teams_list(
    services: &ConsoleServices,
    editor: TeamEditor,
    fallback: Option<String>,
) -> Result<TeamsListVm, ConfigError> {
    let endpoints = &services.config.endpoints;
    let messages = &services.config.messages;
    let collection = required(&endpoints.teams_endpoint.clone().or(fallback), "teams_endpoint")?;
    let delete = template(&endpoints.delete_team_endpoint, "delete_team_endpoint")?;
    Ok(ListVm::new(
        services.clone(),
        collection,
        delete,
        DeleteMessages {
            confirm: messages.delete_team_alert.clone(),
            done: messages.delete_team_message.clone(),
        },
        editor,
    ))
}

pub fn add_team_form(services: &ConsoleServices) -> Result<PageForm, ConfigError> {
    Ok(PageForm {
        vm: FormSubmitVm::new(
            services.clone(),
            SubmitMethod::Post,
            SuccessMessage::Fixed(services.config.messages.new_team.clone()),
            AfterSuccess::ReloadAfter(RELOAD_DELAY),
        ),
        action: required(&services.config.endpoints.create_team_endpoint, "create_team_endpoint")?,
    })
}

/// Submits to the editor's target URL.
pub fn edit_team_form(services: &ConsoleServices) -> FormSubmitVm {
    FormSubmitVm::new(
        services.clone(),
        SubmitMethod::Put,
        SuccessMessage::Fixed(services.config.messages.update_team_message.clone()),
        AfterSuccess::ReloadAfter(RELOAD_DELAY),
    )
}

/// Candidate members for the team modals.
#[derive(Clone)]
pub struct MemberPickerVm {
    pub users: RwSignal<Vec<User>>,
    source: String,
    services: ConsoleServices,
}

impl MemberPickerVm {
    /// `fallback` is the users URL carried by the modal root element.
    pub fn new(services: &ConsoleServices, fallback: Option<String>) -> Result<Self, ConfigError> {
        let source = services.config.endpoints.users_endpoint.clone().or(fallback);
        Ok(Self {
            users: RwSignal::new(Vec::new()),
            source: required(&source, "users_endpoint")?,
            services: services.clone(),
        })
    }

    pub async fn load(&self) {
        let query = ListQuery {
            offset: 0,
            limit: MEMBER_PICKER_LIMIT,
        };
        let result = match with_query(&self.source, &query) {
            Ok(url) => fetch_page::<User>(&self.services, &url).await,
            Err(err) => Err(err),
        };
        match result {
            Ok(page) => self.users.set(page.items),
            Err(err) => self
                .services
                .notify_error("loading team member candidates failed", &err),
        }
    }

    pub fn load_action(&self) {
        let vm = self.clone();
        spawn_local(async move { vm.load().await });
    }
}

/// Description shown in the team info modal; `None` keeps it closed.
#[derive(Clone, Copy)]
pub struct TeamInfo {
    pub description: RwSignal<Option<String>>,
}

impl TeamInfo {
    pub fn new() -> Self {
        Self {
            description: RwSignal::new(None),
        }
    }

    pub fn show(&self, description: &str) {
        self.description.set(Some(description.to_string()));
    }

    pub fn hide(&self) {
        self.description.set(None);
    }
}

impl Default for TeamInfo {
    fn default() -> Self {
        Self::new()
    }
}
