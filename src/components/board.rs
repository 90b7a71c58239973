//! The 3x3 board grid.

use leptos::prelude::*;
use protocol::Board;

/// Clickable board. Reports `(row, col)` through `on_cell`; whether a click
/// turns into a move is up to the page.
#[component]
pub fn GameBoard(board: Signal<Board>, on_cell: Callback<(usize, usize)>) -> impl IntoView {
    let rows = move || {
        board
            .get()
            .rows()
            .iter()
            .enumerate()
            .map(|(row, cells)| {
                let squares = cells
                    .iter()
                    .enumerate()
                    .map(|(col, cell)| {
                        let mark = cell.as_str();
                        let filled = !cell.is_empty();
                        view! {
                            <button
                                class="board__cell"
                                class:board__cell--filled=filled
                                on:click=move |_| on_cell.run((row, col))
                            >
                                {mark}
                            </button>
                        }
                    })
                    .collect_view();
                view! { <div class="board__row">{squares}</div> }
            })
            .collect_view()
    };

    view! { <div class="board">{rows}</div> }
}
