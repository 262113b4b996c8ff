use leptos::prelude::*;

use crate::shared::components::submit_form::SubmitForm;
use crate::shared::config::{required, ConfigError};
use crate::shared::form_submit::{AfterSuccess, FormSubmitVm, PageForm, SubmitMethod, SuccessMessage};
use crate::shared::services::ConsoleServices;

/// POST to the install endpoint, show the server's message, reload.
pub fn install_form(services: &ConsoleServices) -> Result<PageForm, ConfigError> {
    Ok(PageForm {
        vm: FormSubmitVm::new(
            services.clone(),
            SubmitMethod::Post,
            SuccessMessage::FromServer,
            AfterSuccess::ReloadNow,
        ),
        action: required(&services.config.endpoints.install_endpoint, "install_endpoint")?,
    })
}

#[component]
pub fn InstallPage(form: PageForm) -> impl IntoView {
    view! {
        <div class="auth-box">
            <h2>"Install"</h2>
            <SubmitForm vm=form.vm action=Signal::stored(Some(form.action)) submit_label="Install">
                <div class="form-group">
                    <label for="app_name">"Application Name"</label>
                    <input type="text" id="app_name" name="app_name" required />
                </div>
                <div class="form-group">
                    <label for="app_url">"Application URL"</label>
                    <input type="url" id="app_url" name="app_url" required />
                </div>
                <div class="form-group">
                    <label for="app_email">"Application Email"</label>
                    <input type="email" id="app_email" name="app_email" required />
                </div>
                <div class="form-group">
                    <label for="admin_name">"Admin Name"</label>
                    <input type="text" id="admin_name" name="admin_name" required />
                </div>
                <div class="form-group">
                    <label for="admin_email">"Admin Email"</label>
                    <input type="email" id="admin_email" name="admin_email" required />
                </div>
                <div class="form-group">
                    <label for="admin_password">"Admin Password"</label>
                    <input type="password" id="admin_password" name="admin_password" required />
                </div>
            </SubmitForm>
        </div>
    }
}
