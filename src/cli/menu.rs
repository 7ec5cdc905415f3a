use crate::ui::messages::underlined;
use std::io::{self, Write};

/// Every entry of the main menu, numbered as shown to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddCustomer,
    AddRoom,
    AddMaintenanceCompany,
    AddRepair,
    BookRoom,
    AssignHouseCleaning,
    RaiseRepairRequest,
    AvailableRooms,
    BookedRooms,
    WeeklyBookings,
    TopRoomPrices,
    TopCustomerBookings,
    CustomerTotalCost,
    CompanyRepairs,
    TopCompanies,
    RepairsPerYear,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 17] = [
        MenuChoice::AddCustomer,
        MenuChoice::AddRoom,
        MenuChoice::AddMaintenanceCompany,
        MenuChoice::AddRepair,
        MenuChoice::BookRoom,
        MenuChoice::AssignHouseCleaning,
        MenuChoice::RaiseRepairRequest,
        MenuChoice::AvailableRooms,
        MenuChoice::BookedRooms,
        MenuChoice::WeeklyBookings,
        MenuChoice::TopRoomPrices,
        MenuChoice::TopCustomerBookings,
        MenuChoice::CustomerTotalCost,
        MenuChoice::CompanyRepairs,
        MenuChoice::TopCompanies,
        MenuChoice::RepairsPerYear,
        MenuChoice::Exit,
    ];

    pub fn from_selection(n: i64) -> Option<Self> {
        let idx = usize::try_from(n).ok()?.checked_sub(1)?;
        Self::ALL.get(idx).copied()
    }

    pub fn number(&self) -> usize {
        Self::ALL
            .iter()
            .position(|c| c == self)
            .map(|i| i + 1)
            .unwrap_or_default()
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::AddCustomer => "Add new customer",
            MenuChoice::AddRoom => "Add new room",
            MenuChoice::AddMaintenanceCompany => "Add new maintenance company",
            MenuChoice::AddRepair => "Add new repair",
            MenuChoice::BookRoom => "Add new Booking",
            MenuChoice::AssignHouseCleaning => "Assign house cleaning staff to a room",
            MenuChoice::RaiseRepairRequest => "Raise a repair request",
            MenuChoice::AvailableRooms => "Get number of available rooms",
            MenuChoice::BookedRooms => "Get number of booked rooms",
            MenuChoice::WeeklyBookings => "Get hotel bookings for a week",
            MenuChoice::TopRoomPrices => "Get top k rooms with highest price for a date range",
            MenuChoice::TopCustomerBookings => "Get top k highest booking price for a customer",
            MenuChoice::CustomerTotalCost => {
                "Get customer total cost occurred for a given date range"
            }
            MenuChoice::CompanyRepairs => "List the repairs made by maintenance company",
            MenuChoice::TopCompanies => "Get top k maintenance companies based on repair count",
            MenuChoice::RepairsPerYear => {
                "Get number of repairs occurred per year for a given hotel room"
            }
            MenuChoice::Exit => "< EXIT",
        }
    }
}

pub fn print_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", underlined("MAIN MENU"))?;
    for choice in MenuChoice::ALL {
        writeln!(out, "{}. {}", choice.number(), choice.label())?;
    }
    Ok(())
}
