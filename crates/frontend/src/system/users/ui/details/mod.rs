//! Add and edit user modals.

use leptos::prelude::*;

use crate::shared::components::modal_frame::ModalFrame;
use crate::shared::components::submit_form::SubmitForm;
use crate::shared::form_submit::{FormSubmitVm, PageForm};
use crate::shared::icons::icon;
use crate::system::users::view_model::UserEditor;

const ROLES: [(&str, &str); 2] = [("user", "User"), ("admin", "Admin")];

#[component]
pub fn AddUserModal(form: PageForm) -> impl IntoView {
    let open = RwSignal::new(false);

    view! {
        <button type="button" class="btn btn-primary" on:click=move |_| open.set(true)>
            {icon("plus")}
            <span>"Add User"</span>
        </button>
        <ModalFrame title="Add User" visible=open on_close=Callback::new(move |_| open.set(false))>
            <SubmitForm vm=form.vm action=Signal::stored(Some(form.action)) submit_label="Create">
                <div class="form-group">
                    <label for="add_user_name">"Name"</label>
                    <input type="text" id="add_user_name" name="name" required />
                </div>
                <div class="form-group">
                    <label for="add_user_email">"Email"</label>
                    <input type="email" id="add_user_email" name="email" required />
                </div>
                <div class="form-group">
                    <label for="add_user_role">"Role"</label>
                    <select id="add_user_role" name="role">
                        {ROLES
                            .iter()
                            .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                            .collect_view()}
                    </select>
                </div>
                <div class="form-group">
                    <label for="add_user_password">"Password"</label>
                    <input type="password" id="add_user_password" name="password" autocomplete="new-password" required />
                </div>
            </SubmitForm>
        </ModalFrame>
    }
}

/// Visible while a row is selected in the users list.
#[component]
pub fn EditUserModal(editor: UserEditor, vm: FormSubmitVm) -> impl IntoView {
    let values = editor.values;
    let selected = editor.selected_id;
    let close_editor = editor.clone();
    let target = Signal::derive(move || editor.tracked_target_url());
    let field = move |name: &'static str| move || values.with(|v| v.text(name).to_string());

    view! {
        <ModalFrame
            title="Edit User"
            visible=Signal::derive(move || selected.with(Option::is_some))
            on_close=Callback::new(move |_| close_editor.close())
        >
            <SubmitForm vm=vm action=target submit_label="Update">
                <div class="form-group">
                    <label for="edit_user_name">"Name"</label>
                    <input type="text" id="edit_user_name" name="name" prop:value=field("name") required />
                </div>
                <div class="form-group">
                    <label for="edit_user_email">"Email"</label>
                    <input type="email" id="edit_user_email" name="email" prop:value=field("email") required />
                </div>
                <div class="form-group">
                    <label for="edit_user_role">"Role"</label>
                    <select id="edit_user_role" name="role" prop:value=field("role")>
                        {ROLES
                            .iter()
                            .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                            .collect_view()}
                    </select>
                </div>
                <div class="form-group">
                    <label for="edit_user_password">"New Password"</label>
                    <input type="password" id="edit_user_password" name="password" autocomplete="new-password" />
                </div>
            </SubmitForm>
        </ModalFrame>
    }
}
