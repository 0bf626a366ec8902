pub mod bookings;
pub mod info;
pub mod rooms;

use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::info;

use crate::console::Console;
use crate::error::ConsoleError;
use crate::models::cinema::{Cinema, MAX_ROOMS};
use crate::services::TicketPricer;

/// Пункты главного меню в порядке отображения.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    SetupRoom = 1,
    Availability = 2,
    Reserve = 3,
    IssueTicket = 4,
    Cancel = 5,
    Info = 6,
    Exit = 7,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::SetupRoom,
        MenuChoice::Availability,
        MenuChoice::Reserve,
        MenuChoice::IssueTicket,
        MenuChoice::Cancel,
        MenuChoice::Info,
        MenuChoice::Exit,
    ];

    pub fn from_number(n: usize) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| *c as usize == n)
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::SetupRoom => "Setup Room Information",
            MenuChoice::Availability => "Check Seat Availability",
            MenuChoice::Reserve => "Reserve a Seat",
            MenuChoice::IssueTicket => "Issue Ticket",
            MenuChoice::Cancel => "Cancel Reservation",
            MenuChoice::Info => "Display Cinema Info",
            MenuChoice::Exit => "Exit",
        }
    }
}

pub fn render_menu() -> String {
    let mut out = String::from("\n========== CINEMA MANAGEMENT SYSTEM ==========\n");
    for choice in MenuChoice::ALL {
        out.push_str(&format!("{}. {}\n", choice as usize, choice.label()));
    }
    out.push_str("==============================================");
    out
}

/// Полная интерактивная сессия. Конец ввода - штатный выход.
pub async fn run<R, W>(console: &mut Console<R, W>, pricer: TicketPricer) -> Result<(), ConsoleError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    match run_session(console, pricer).await {
        Err(ConsoleError::InputClosed) => {
            info!("Input closed, ending session");
            Ok(())
        }
        other => other,
    }
}

async fn run_session<R, W>(console: &mut Console<R, W>, pricer: TicketPricer) -> Result<(), ConsoleError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    console.println("========================================").await?;
    console.println("   WELCOME TO CINEMA MANAGEMENT SYSTEM  ").await?;
    console.println("========================================").await?;

    let mut cinema = loop {
        let name = console.prompt_string("Give the name of the cinema: ").await?;
        let room_count = console
            .prompt_int(
                &format!("Give number of screening rooms in the cinema (1-{MAX_ROOMS}): "),
                1,
                MAX_ROOMS,
            )
            .await?;
        match Cinema::with_pricer(name, room_count, pricer) {
            Ok(cinema) => break cinema,
            Err(e) => console.println(&e.to_string()).await?,
        }
    };

    console.println("\nPlease setup all rooms first:").await?;
    for index in 0..cinema.room_count() {
        rooms::setup_room(console, &mut cinema, index).await?;
    }

    loop {
        console.println(&render_menu()).await?;
        let number = console.prompt_int("Choose an option: ", 1, MenuChoice::ALL.len()).await?;
        let Some(choice) = MenuChoice::from_number(number) else {
            continue;
        };

        match choice {
            MenuChoice::SetupRoom => {
                let index = select_room(console, &cinema, "Which room to setup").await?;
                rooms::setup_room(console, &mut cinema, index).await?;
            }
            MenuChoice::Availability => {
                let index =
                    select_room(console, &cinema, "Which room's availability to check").await?;
                rooms::show_availability(console, &cinema, index).await?;
            }
            MenuChoice::Reserve => {
                let index = select_room(console, &cinema, "Which room").await?;
                bookings::reserve_seat(console, &mut cinema, index).await?;
            }
            MenuChoice::IssueTicket => {
                let index = select_room(console, &cinema, "Which room").await?;
                bookings::issue_ticket(console, &cinema, index).await?;
            }
            MenuChoice::Cancel => {
                let index = select_room(console, &cinema, "Which room").await?;
                bookings::cancel_reservation(console, &mut cinema, index).await?;
            }
            MenuChoice::Info => info::display_info(console, &cinema).await?,
            MenuChoice::Exit => {
                console.println("\nThank you for using Cinema Management System!").await?;
                console.println("Goodbye!").await?;
                return Ok(());
            }
        }

        if !console.prompt_yes_no("\nContinue? (Yes/No): ").await? {
            console.println("\nThank you for using Cinema Management System!").await?;
            return Ok(());
        }
    }
}

// В интерфейсе залы нумеруются с 1, в ядре - с 0
async fn select_room<R, W>(
    console: &mut Console<R, W>,
    cinema: &Cinema,
    question: &str,
) -> Result<usize, ConsoleError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let count = cinema.room_count();
    let number = console
        .prompt_int(&format!("{question} (1-{count})? "), 1, count)
        .await?;
    Ok(number - 1)
}
