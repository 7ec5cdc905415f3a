use crate::cli::console::Console;
use crate::core::reports::{DateRange, Report, ReportLogic};
use crate::db::Executor;
use crate::errors::AppResult;
use crate::utils::{date, fields};
use std::io::{BufRead, Write};

fn run<R: BufRead, W: Write>(
    exec: &mut dyn Executor,
    console: &mut Console<R, W>,
    report: Report,
) -> AppResult<()> {
    ReportLogic::apply(exec, console.out(), &report)?;
    Ok(())
}

fn ask_range<R: BufRead, W: Write>(console: &mut Console<R, W>) -> AppResult<(String, String)> {
    let from = console.ask("From date(mm/dd/yyyy)")?;
    let to = console.ask("To date(mm/dd/yyyy)")?;
    Ok((from, to))
}

fn parse_range(from: &str, to: &str) -> AppResult<DateRange> {
    DateRange::new(fields::date("from date", from)?, fields::date("to date", to)?)
}

pub fn available_rooms<R: BufRead, W: Write>(
    exec: &mut dyn Executor,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    let hotel_id = console.ask("Hotel ID")?;
    let report = Report::AvailableRooms {
        hotel_id: fields::integer("hotel ID", &hotel_id)?,
        on: date::today(),
    };
    run(exec, console, report)
}

pub fn booked_rooms<R: BufRead, W: Write>(
    exec: &mut dyn Executor,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    let hotel_id = console.ask("Hotel ID")?;
    let report = Report::BookedRooms {
        hotel_id: fields::integer("hotel ID", &hotel_id)?,
        on: date::today(),
    };
    run(exec, console, report)
}

pub fn weekly_bookings<R: BufRead, W: Write>(
    exec: &mut dyn Executor,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    let hotel_id = console.ask("Hotel ID")?;
    let start = console.ask("Start date(mm/dd/yyyy)")?;
    let report = Report::WeeklyBookings {
        hotel_id: fields::integer("hotel ID", &hotel_id)?,
        start: fields::date("start date", &start)?,
    };
    run(exec, console, report)
}

pub fn top_room_prices<R: BufRead, W: Write>(
    exec: &mut dyn Executor,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    let (from, to) = ask_range(console)?;
    let k = console.ask("K")?;
    let report = Report::TopRoomPrices {
        range: parse_range(&from, &to)?,
        k: fields::positive("K", &k)?,
    };
    run(exec, console, report)
}

pub fn top_customer_bookings<R: BufRead, W: Write>(
    exec: &mut dyn Executor,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    let first_name = console.ask("Customer first name")?;
    let last_name = console.ask("Customer last name")?;
    let k = console.ask("K")?;
    let report = Report::TopCustomerBookings {
        first_name: fields::required("first name", &first_name)?,
        last_name: fields::required("last name", &last_name)?,
        k: fields::positive("K", &k)?,
    };
    run(exec, console, report)
}

pub fn customer_total_cost<R: BufRead, W: Write>(
    exec: &mut dyn Executor,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    let hotel_id = console.ask("Hotel ID")?;
    let first_name = console.ask("Customer first name")?;
    let last_name = console.ask("Customer last name")?;
    let (from, to) = ask_range(console)?;
    let report = Report::CustomerTotalCost {
        hotel_id: fields::integer("hotel ID", &hotel_id)?,
        first_name: fields::required("first name", &first_name)?,
        last_name: fields::required("last name", &last_name)?,
        range: parse_range(&from, &to)?,
    };
    run(exec, console, report)
}

pub fn company_repairs<R: BufRead, W: Write>(
    exec: &mut dyn Executor,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    let company = console.ask("Maintenance Company Name")?;
    let company = fields::required("company name", &company)?;
    writeln!(console.out(), "Maintenance Company Name: {company}")?;
    run(exec, console, Report::CompanyRepairs { company })
}

pub fn top_companies<R: BufRead, W: Write>(
    exec: &mut dyn Executor,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    let k = console.ask("K")?;
    let report = Report::TopCompanies {
        k: fields::positive("K", &k)?,
    };
    run(exec, console, report)
}

pub fn repairs_per_year<R: BufRead, W: Write>(
    exec: &mut dyn Executor,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    let hotel_id = console.ask("Hotel ID")?;
    let room_no = console.ask("RoomNo")?;
    let report = Report::RepairsPerYear {
        hotel_id: fields::integer("hotel ID", &hotel_id)?,
        room_no: fields::integer("room number", &room_no)?,
    };
    run(exec, console, report)
}
