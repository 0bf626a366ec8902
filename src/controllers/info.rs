use tokio::io::{AsyncBufRead, AsyncWrite};

use crate::console::Console;
use crate::error::ConsoleError;
use crate::models::{Cinema, CinemaInfo};

pub async fn display_info<R, W>(console: &mut Console<R, W>, cinema: &Cinema) -> Result<(), ConsoleError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    console.print(&render_info(&cinema.info())).await
}

pub fn render_info(info: &CinemaInfo) -> String {
    let rule = "========================================";
    format!(
        "\n{rule}\n         CINEMA INFORMATION             \n{rule}\n\
         Cinema Name: {}\nTotal Rooms: {}\n{rule}\n\n",
        info.name, info.room_count
    )
}
