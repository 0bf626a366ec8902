//! rooms.rs
//!
//! Настройка залов и просмотр доступности мест.

use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::warn;

use crate::console::Console;
use crate::error::ConsoleError;
use crate::models::room::{MAX_ROWS, MAX_SEATS_PER_ROW};
use crate::models::{Availability, Cinema, Movie, RoomParams};

/// Опрашивает все параметры зала и применяет их. Прежние брони зала сбрасываются.
pub async fn setup_room<R, W>(
    console: &mut Console<R, W>,
    cinema: &mut Cinema,
    index: usize,
) -> Result<(), ConsoleError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    console
        .println(&format!("\n=== Setting up Room {} ===", index + 1))
        .await?;

    let rows = console
        .prompt_int("How many rows does this room have? ", 1, MAX_ROWS)
        .await?;
    let seats_per_row = console
        .prompt_int("How many seats does every row have? ", 1, MAX_SEATS_PER_ROW)
        .await?;
    let is_3d = console
        .prompt_int("Is the room 3D? (1 = Yes, 0 = No): ", 0, 1)
        .await?
        == 1;
    let room_code = console.prompt_string("Give room code: ").await?;
    let early_name = console
        .prompt_string("Give the name of the movie for early screening: ")
        .await?;
    let early_code = console
        .prompt_string("Give early screening movie code: ")
        .await?;
    let late_name = console
        .prompt_string("Give the name of the movie for late screening: ")
        .await?;
    let late_code = console
        .prompt_string("Give late screening movie code: ")
        .await?;

    let params = RoomParams {
        rows,
        seats_per_row,
        is_3d,
        room_code,
        early_movie: Movie::new(early_name, early_code),
        late_movie: Movie::new(late_name, late_code),
    };

    match cinema.configure_room(index, params) {
        Ok(()) => {
            console
                .println(&format!("Room {} setup complete!", index + 1))
                .await
        }
        Err(e) => {
            warn!(room = index + 1, error = %e, "Room setup rejected");
            console.println(&format!("Room setup failed: {e}")).await
        }
    }
}

pub async fn show_availability<R, W>(
    console: &mut Console<R, W>,
    cinema: &Cinema,
    index: usize,
) -> Result<(), ConsoleError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    match cinema.availability(index) {
        Ok(availability) => console.print(&render_availability(&availability)).await,
        Err(e) => console.println(&e.to_string()).await,
    }
}

fn digits(n: usize) -> usize {
    n.to_string().len()
}

/// Текстовая карта зала: `R<i>:` и ячейки `0`/`1`.
pub fn render_availability(availability: &Availability<'_>) -> String {
    let room = &availability.room;
    let grid = availability.grid;

    let mut out = format!("\n=== Availability for Room {} ===\n", room.number);
    out.push_str(&format!("Movie (Early): {}\n", room.early_movie.name));
    out.push_str(&format!("Movie (Late): {}\n", room.late_movie.name));
    out.push_str(&format!("3D: {}\n", if room.is_3d { "Yes" } else { "No" }));
    out.push_str("\nSeat Map (0 = Available, 1 = Reserved):\n");

    let cell = digits(grid.seats_per_row().saturating_sub(1));
    let label = digits(grid.rows().saturating_sub(1)) + 3;

    if grid.seats_per_row() > 0 {
        let header: Vec<String> = (0..grid.seats_per_row())
            .map(|seat| format!("{seat:>cell$}"))
            .collect();
        out.push_str(&format!("{:label$}{}\n", "", header.join(" ")));
    }

    for (i, row) in grid.render().enumerate() {
        let cells: Vec<String> = row
            .iter()
            .map(|state| format!("{state:>cell$}"))
            .collect();
        out.push_str(&format!("{:<label$}{}\n", format!("R{i}:"), cells.join(" ")));
    }

    out.push_str(&format!("\nTotal available seats: {}\n", availability.available));
    out
}
