//! Mounts one view per console root element found in the page.

use std::sync::Arc;

use leptos::prelude::*;
use thaw::ConfigProvider;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::shared::browser::WindowBrowser;
use crate::shared::config::{ConfigError, ConsoleConfig};
use crate::shared::http::GlooHttpClient;
use crate::shared::notification::{ToastBanner, ToastNotifier};
use crate::shared::scheduler::TimeoutScheduler;
use crate::shared::services::ConsoleServices;
use crate::system::pages::api_key::{ApiKeyPanel, ApiKeyVm};
use crate::system::pages::install::{install_form, InstallPage};
use crate::system::pages::login::{login_form, LoginPage};
use crate::system::pages::profile::{profile_form, ProfilePage};
use crate::system::pages::settings::{settings_form, SettingsPage};
use crate::system::teams::ui::details::{AddTeamModal, EditTeamModal, TeamInfoModal};
use crate::system::teams::ui::list::TeamsList;
use crate::system::teams::view_model::{
    add_team_form, edit_team_form, team_editor, teams_list, MemberPickerVm, TeamInfo,
};
use crate::system::users::ui::details::{AddUserModal, EditUserModal};
use crate::system::users::ui::list::UsersList;
use crate::system::users::view_model::{add_user_form, edit_user_form, user_editor, users_list};

/// Collection URL fallback carried by list and team modal roots.
const ROOT_ACTION_ATTR: &str = "data-action";

pub fn mount_console() {
    let config = ConsoleConfig::from_window().unwrap_or_else(|err| {
        log::error!("console configuration unavailable: {}", err);
        ConsoleConfig::default()
    });

    let notifier = ToastNotifier::new();
    let services = ConsoleServices::new(
        Arc::new(GlooHttpClient::from_document()),
        Arc::new(notifier),
        Arc::new(WindowBrowser),
        Arc::new(TimeoutScheduler),
        config,
    );

    leptos::mount::mount_to_body(move || view! { <ToastBanner notifier=notifier /> });

    let s = &services;

    mount_page("app_install", |_| install_form(s), |form| {
        view! { <InstallPage form=form /> }.into_any()
    });
    mount_page("app_login", |_| login_form(s), |form| {
        view! { <LoginPage form=form /> }.into_any()
    });
    mount_page("app_settings", |_| settings_form(s), |form| {
        view! { <SettingsPage form=form /> }.into_any()
    });
    mount_page("app_profile", |_| profile_form(s), |form| {
        view! { <ProfilePage form=form /> }.into_any()
    });
    mount_page("app_api_key", |_| ApiKeyVm::new(s), |vm| {
        view! { <ApiKeyPanel vm=vm /> }.into_any()
    });

    // A list and its edit modal share one editor.
    let users_editor = user_editor(s);
    mount_page("add_user_modal", |_| add_user_form(s), |form| {
        view! { <AddUserModal form=form /> }.into_any()
    });
    mount_page(
        "edit_user_modal",
        |_| Ok((users_editor.clone()?, edit_user_form(s))),
        |(editor, vm)| view! { <EditUserModal editor=editor vm=vm /> }.into_any(),
    );
    mount_page(
        "users_list",
        |root| users_list(s, users_editor.clone()?, root_action(root)),
        |vm| view! { <UsersList vm=vm /> }.into_any(),
    );

    let teams_editor = team_editor(s);
    mount_page(
        "add_team_modal",
        |root| Ok((add_team_form(s)?, MemberPickerVm::new(s, root_action(root))?)),
        |(form, picker)| view! { <AddTeamModal form=form picker=picker /> }.into_any(),
    );
    mount_page(
        "edit_team_modal",
        |root| {
            Ok((
                teams_editor.clone()?,
                edit_team_form(s),
                MemberPickerVm::new(s, root_action(root))?,
            ))
        },
        |(editor, vm, picker)| {
            view! { <EditTeamModal editor=editor vm=vm picker=picker /> }.into_any()
        },
    );
    mount_page(
        "teams_list",
        |root| teams_list(s, teams_editor.clone()?, root_action(root)),
        |vm| {
            let info = TeamInfo::new();
            view! {
                <TeamsList vm=vm info=info />
                <TeamInfoModal info=info />
            }
            .into_any()
        },
    );
}

/// Mount `render(build(root))` into `#root_id` when the page has it.
fn mount_page<V>(
    root_id: &'static str,
    build: impl FnOnce(&HtmlElement) -> Result<V, ConfigError>,
    render: impl FnOnce(V) -> AnyView + Send + 'static,
) where
    V: Send + 'static,
{
    let Some(root) = find_root(root_id) else {
        return;
    };
    match build(&root) {
        Ok(vm) => {
            log::debug!("mounting #{}", root_id);
            leptos::mount::mount_to(root, move || {
                view! { <ConfigProvider>{render(vm)}</ConfigProvider> }
            })
            .forget();
        }
        Err(err) => log::error!("#{} not mounted: {}", root_id, err),
    }
}

fn find_root(id: &str) -> Option<HtmlElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()
}

fn root_action(root: &HtmlElement) -> Option<String> {
    root.get_attribute(ROOT_ACTION_ATTR)
        .filter(|action| !action.is_empty())
}
