use contracts::system::teams::Team;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::system::teams::view_model::{TeamInfo, TeamsListVm};

#[component]
pub fn TeamsList(vm: TeamsListVm, info: TeamInfo) -> impl IntoView {
    let state = vm.state;

    vm.load_data_action();
    let cleanup_vm = vm.clone();
    on_cleanup(move || cleanup_vm.teardown());

    let prev_vm = vm.clone();
    let next_vm = vm.clone();
    let total_pages_vm = vm.clone();

    view! {
        <div class="table-wrapper">
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Name"</TableHeaderCell>
                        <TableHeaderCell>"Slug"</TableHeaderCell>
                        <TableHeaderCell>"Members"</TableHeaderCell>
                        <TableHeaderCell>"Created"</TableHeaderCell>
                        <TableHeaderCell>"Updated"</TableHeaderCell>
                        <TableHeaderCell>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || state.with(|s| s.items.clone())
                        key=|t: &Team| t.uuid.clone()
                        children=move |team| {
                            let edit_vm = vm.clone();
                            let delete_vm = vm.clone();
                            let edit_id = team.uuid.clone();
                            let delete_id = team.uuid.clone();
                            let description = team.description.clone();
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout truncate=true>
                                            <span style="font-weight: 500;">{team.name.clone()}</span>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>{team.slug.clone()}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{team.members.len()}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{format_datetime(&team.created_at)}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{format_datetime(&team.updated_at)}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                size=ButtonSize::Small
                                                on_click=move |_| info.show(&description)
                                            >
                                                {icon("info")}
                                            </Button>
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                size=ButtonSize::Small
                                                on_click=move |_| edit_vm.edit_action(edit_id.clone())
                                            >
                                                {icon("edit")}
                                            </Button>
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                size=ButtonSize::Small
                                                on_click=move |_| delete_vm.delete_action(delete_id.clone())
                                            >
                                                {icon("trash")}
                                            </Button>
                                        </TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }
                        }
                    />
                </TableBody>
            </Table>

            <PaginationControls
                current_page=Signal::derive(move || state.with(|s| s.current_page))
                total_pages=Signal::derive(move || total_pages_vm.total_pages())
                total_count=Signal::derive(move || state.with(|s| s.total_count))
                on_previous=Callback::new(move |_| prev_vm.load_previous_page_action())
                on_next=Callback::new(move |_| next_vm.load_next_page_action())
            />
        </div>
    }
}
