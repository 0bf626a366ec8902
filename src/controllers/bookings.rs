use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::warn;

use crate::console::Console;
use crate::error::{CinemaError, ConsoleError};
use crate::models::{Cinema, Ticket};

/* ---------- helpers ---------- */

// Ряд и место в реальных границах выбранного зала; None, если зал ещё пустой
async fn prompt_seat<R, W>(
    console: &mut Console<R, W>,
    cinema: &Cinema,
    index: usize,
) -> Result<Option<(usize, usize)>, ConsoleError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let (rows, seats) = match cinema.room(index) {
        Ok(room) if room.is_configured() => (room.grid().rows(), room.grid().seats_per_row()),
        Ok(_) => {
            console
                .println(&format!("Room {} is not set up yet!", index + 1))
                .await?;
            return Ok(None);
        }
        Err(e) => {
            console.println(&e.to_string()).await?;
            return Ok(None);
        }
    };

    let row = console
        .prompt_int(&format!("Give number of row (0-{}): ", rows - 1), 0, rows - 1)
        .await?;
    let seat = console
        .prompt_int(&format!("Give number of seat (0-{}): ", seats - 1), 0, seats - 1)
        .await?;
    Ok(Some((row, seat)))
}

/* ---------- RESERVATIONS ---------- */

pub async fn reserve_seat<R, W>(
    console: &mut Console<R, W>,
    cinema: &mut Cinema,
    index: usize,
) -> Result<(), ConsoleError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    console.println("\n=== Seat Reservation ===").await?;
    let Some((row, seat)) = prompt_seat(console, cinema, index).await? else {
        return Ok(());
    };

    match cinema.reserve_seat(index, row, seat) {
        Ok(()) => console.println("Seat reserved successfully!").await,
        Err(CinemaError::AlreadyReserved { .. }) => {
            console.println("Sorry, this seat is already reserved!").await
        }
        Err(e) => {
            warn!(room = index + 1, row, seat, error = %e, "Reservation rejected");
            console.println(&e.to_string()).await
        }
    }
}

pub async fn cancel_reservation<R, W>(
    console: &mut Console<R, W>,
    cinema: &mut Cinema,
    index: usize,
) -> Result<(), ConsoleError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    console.println("\n=== Cancel Reservation ===").await?;
    let Some((row, seat)) = prompt_seat(console, cinema, index).await? else {
        return Ok(());
    };

    match cinema.cancel_seat(index, row, seat) {
        Ok(()) => console.println("Reservation cancelled successfully!").await,
        Err(CinemaError::NotReserved { .. }) => console.println("This seat is not reserved!").await,
        Err(e) => {
            warn!(room = index + 1, row, seat, error = %e, "Cancellation rejected");
            console.println(&e.to_string()).await
        }
    }
}

/* ---------- TICKETS ---------- */

pub async fn issue_ticket<R, W>(
    console: &mut Console<R, W>,
    cinema: &Cinema,
    index: usize,
) -> Result<(), ConsoleError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let Some((row, seat)) = prompt_seat(console, cinema, index).await? else {
        return Ok(());
    };

    match cinema.issue_ticket(index, row, seat) {
        Ok(ticket) => console.print(&render_ticket(&ticket)).await,
        Err(CinemaError::NotReserved { .. }) => {
            console
                .println("This seat is not reserved! Reserve it before issuing a ticket.")
                .await
        }
        Err(e) => console.println(&e.to_string()).await,
    }
}

pub fn render_ticket(ticket: &Ticket) -> String {
    let rule = "========================================";
    let mut out = format!("\n{rule}\n           CINEMA TICKET                \n{rule}\n");
    out.push_str(&format!("Cinema: {}\n", ticket.cinema_name));
    out.push_str(&format!("Room Code: {}\n", ticket.room_code));
    out.push_str(&format!("Row: {} | Seat: {}\n", ticket.row, ticket.seat));
    out.push_str(&format!(
        "3D Screening: {}\n",
        if ticket.is_3d { "Yes" } else { "No" }
    ));
    out.push_str("----------------------------------------\n");
    out.push_str(&format!("Ticket Price: ${}\n", ticket.formatted_price()));
    out.push_str(&format!("Ticket ID: {}\n", ticket.id));
    out.push_str(&format!(
        "Issued: {}\n",
        ticket.issued_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    out.push_str(&format!("{rule}\nEnjoy your movie!\n{rule}\n\n"));
    out
}
