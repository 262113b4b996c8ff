//! Add, edit and info team modals.

use contracts::system::users::User;
use leptos::prelude::*;

use crate::shared::components::modal_frame::ModalFrame;
use crate::shared::components::submit_form::SubmitForm;
use crate::shared::form_submit::{FormSubmitVm, PageForm};
use crate::shared::icons::icon;
use crate::system::teams::view_model::{MemberPickerVm, TeamEditor, TeamInfo};

/// `<select multiple name="members">` over the picker's users. An option is
/// selected when `is_selected(uuid)` holds.
#[component]
fn MembersSelect(
    #[prop(into)] id: String,
    picker: MemberPickerVm,
    is_selected: Callback<String, bool>,
) -> impl IntoView {
    picker.load_action();
    let users = picker.users;

    view! {
        <select id=id name="members" multiple>
            <For
                each=move || users.get()
                key=|u: &User| u.uuid.clone()
                children=move |user| {
                    let uuid = user.uuid.clone();
                    let selected_uuid = user.uuid.clone();
                    view! {
                        <option
                            value=uuid
                            prop:selected=move || is_selected.run(selected_uuid.clone())
                        >
                            {user.name.clone()}
                        </option>
                    }
                }
            />
        </select>
    }
}

#[component]
pub fn AddTeamModal(form: PageForm, picker: MemberPickerVm) -> impl IntoView {
    let open = RwSignal::new(false);

    view! {
        <button type="button" class="btn btn-primary" on:click=move |_| open.set(true)>
            {icon("plus")}
            <span>"Add Team"</span>
        </button>
        <ModalFrame title="Add Team" visible=open on_close=Callback::new(move |_| open.set(false))>
            <SubmitForm vm=form.vm action=Signal::stored(Some(form.action)) submit_label="Create">
                <div class="form-group">
                    <label for="add_team_name">"Name"</label>
                    <input type="text" id="add_team_name" name="name" required />
                </div>
                <div class="form-group">
                    <label for="add_team_slug">"Slug"</label>
                    <input type="text" id="add_team_slug" name="slug" required />
                </div>
                <div class="form-group">
                    <label for="add_team_description">"Description"</label>
                    <textarea id="add_team_description" name="description"></textarea>
                </div>
                <div class="form-group">
                    <label for="add_team_members">"Members"</label>
                    <MembersSelect
                        id="add_team_members"
                        picker=picker
                        is_selected=Callback::new(|_: String| false)
                    />
                </div>
            </SubmitForm>
        </ModalFrame>
    }
}

/// Visible while a row is selected in the teams list.
#[component]
pub fn EditTeamModal(editor: TeamEditor, vm: FormSubmitVm, picker: MemberPickerVm) -> impl IntoView {
    let values = editor.values;
    let selected = editor.selected_id;
    let close_editor = editor.clone();
    let target = Signal::derive(move || editor.tracked_target_url());
    let field = move |name: &'static str| move || values.with(|v| v.text(name).to_string());
    let is_member =
        Callback::new(move |uuid: String| values.with(|v| v.contains_value("members", &uuid)));

    view! {
        <ModalFrame
            title="Edit Team"
            visible=Signal::derive(move || selected.with(Option::is_some))
            on_close=Callback::new(move |_| close_editor.close())
        >
            <SubmitForm vm=vm action=target submit_label="Update">
                <div class="form-group">
                    <label for="edit_team_name">"Name"</label>
                    <input type="text" id="edit_team_name" name="name" prop:value=field("name") required />
                </div>
                <div class="form-group">
                    <label for="edit_team_slug">"Slug"</label>
                    <input type="text" id="edit_team_slug" name="slug" prop:value=field("slug") required />
                </div>
                <div class="form-group">
                    <label for="edit_team_description">"Description"</label>
                    <textarea id="edit_team_description" name="description" prop:value=field("description")></textarea>
                </div>
                <div class="form-group">
                    <label for="edit_team_members">"Members"</label>
                    <MembersSelect id="edit_team_members" picker=picker is_selected=is_member />
                </div>
            </SubmitForm>
        </ModalFrame>
    }
}

#[component]
pub fn TeamInfoModal(info: TeamInfo) -> impl IntoView {
    let description = info.description;

    view! {
        <ModalFrame
            title="Team Info"
            visible=Signal::derive(move || description.with(Option::is_some))
            on_close=Callback::new(move |_| info.hide())
        >
            <div id="team_info_modal_content">
                {move || description.get().unwrap_or_default()}
            </div>
        </ModalFrame>
    }
}
