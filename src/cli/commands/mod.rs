pub mod add;
pub mod report;

use crate::cli::console::Console;
use crate::cli::menu::MenuChoice;
use crate::db::Executor;
use crate::errors::AppResult;
use std::io::{BufRead, Write};

/// Route a menu selection to its handler.
pub fn handle<R: BufRead, W: Write>(
    choice: MenuChoice,
    exec: &mut dyn Executor,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    match choice {
        MenuChoice::AddCustomer => add::add_customer(exec, console),
        MenuChoice::AddRoom => add::add_room(exec, console),
        MenuChoice::AddMaintenanceCompany => add::add_maintenance_company(exec, console),
        MenuChoice::AddRepair => add::add_repair(exec, console),
        MenuChoice::BookRoom => add::book_room(exec, console),
        MenuChoice::AssignHouseCleaning => add::assign_house_cleaning(exec, console),
        MenuChoice::RaiseRepairRequest => add::raise_repair_request(exec, console),
        MenuChoice::AvailableRooms => report::available_rooms(exec, console),
        MenuChoice::BookedRooms => report::booked_rooms(exec, console),
        MenuChoice::WeeklyBookings => report::weekly_bookings(exec, console),
        MenuChoice::TopRoomPrices => report::top_room_prices(exec, console),
        MenuChoice::TopCustomerBookings => report::top_customer_bookings(exec, console),
        MenuChoice::CustomerTotalCost => report::customer_total_cost(exec, console),
        MenuChoice::CompanyRepairs => report::company_repairs(exec, console),
        MenuChoice::TopCompanies => report::top_companies(exec, console),
        MenuChoice::RepairsPerYear => report::repairs_per_year(exec, console),
        MenuChoice::Exit => Ok(()),
    }
}
