//! Paginated ranking table
//!
//! Fetches the current page whenever it changes and renders nothing until the
//! first page arrives. A failed fetch keeps the rows already on screen.

use leptos::*;

use crate::api::fetch_data;
use crate::state::{PageCursor, PagedCollection, TableKind};

/// Ranked attendants, 8 per page, scores coloured by sign
#[component]
pub fn AttendantsTable() -> impl IntoView {
    view! { <PaginatedTable kind=TableKind::Attendants /> }
}

/// Ranked clients, 10 per page
#[component]
pub fn ClientsTable() -> impl IntoView {
    view! { <PaginatedTable kind=TableKind::Clients /> }
}

#[component]
fn PaginatedTable(kind: TableKind) -> impl IntoView {
    let cursor = create_rw_signal(PageCursor::new(kind.page_size()));
    let data = create_rw_signal(None::<PagedCollection>);
    // Sequence of the latest request; older responses are dropped
    let latest = store_value(0u64);

    create_effect(move |_| {
        let endpoint = kind.endpoint(cursor.with(|c| c.current_page));
        latest.update_value(|seq| *seq += 1);
        let seq = latest.get_value();

        spawn_local(async move {
            let response = fetch_data::<PagedCollection>(&endpoint).await;
            if latest.get_value() != seq {
                return;
            }
            if let Some(page) = response {
                data.set(Some(page));
            }
        });
    });

    let total = move || data.with(|d| d.as_ref().map(|page| page.total).unwrap_or(0));

    let handle_prev_page = move |_| {
        if cursor.get_untracked().can_go_prev() {
            cursor.update(|c| c.current_page -= 1);
        }
    };

    let handle_next_page = move |_| {
        let total = data.with_untracked(|d| d.as_ref().map(|page| page.total).unwrap_or(0));
        if cursor.get_untracked().can_go_next(total) {
            cursor.update(|c| c.current_page += 1);
        }
    };

    let (name_heading, score_heading) = kind.headings();

    move || {
        data.get().map(|page| {
            let rows = page
                .items
                .into_iter()
                .enumerate()
                .map(|(index, entry)| {
                    let score_class =
                        format!("py-2 text-right font-semibold {}", kind.score_class(entry.score));
                    view! {
                        <tr class="border-b border-gray-100 last:border-0">
                            <td class="py-2 text-gray-700">{format!("{}. {}", index + 1, entry.name)}</td>
                            <td class=score_class>{entry.score}</td>
                        </tr>
                    }
                })
                .collect_view();

            view! {
                <div class="bg-white rounded-lg shadow p-4">
                    <table class="w-full text-sm">
                        <thead>
                            <tr class="border-b border-gray-200 text-gray-500">
                                <th class="py-2 text-left font-medium">{name_heading}</th>
                                <th class="py-2 text-right font-medium">{score_heading}</th>
                            </tr>
                        </thead>
                        <tbody>{rows}</tbody>
                    </table>

                    <div class="flex items-center justify-end space-x-3 mt-3 text-sm text-gray-500">
                        <button
                            on:click=handle_prev_page
                            disabled=move || !cursor.get().can_go_prev()
                            class="px-2 py-1 rounded hover:bg-gray-100 disabled:opacity-40"
                        >
                            "<"
                        </button>
                        <span>{move || cursor.get().range_label(total())}</span>
                        <button
                            on:click=handle_next_page
                            disabled=move || !cursor.get().can_go_next(total())
                            class="px-2 py-1 rounded hover:bg-gray-100 disabled:opacity-40"
                        >
                            ">"
                        </button>
                    </div>
                </div>
            }
        })
    }
}
