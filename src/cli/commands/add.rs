//! The "add / assign / request" forms.
//!
//! Each form allocates its identifier first, collects every field, and only
//! then validates, so a rejected form never leaves answers queued up for
//! the next menu prompt.

use crate::cli::console::Console;
use crate::core::add::AddLogic;
use crate::core::ids::{IdSource, next_id};
use crate::db::Executor;
use crate::errors::{AppError, AppResult};
use crate::models::{
    Gender, NewAssignment, NewBooking, NewCustomer, NewMaintenanceCompany, NewRepair,
    NewRepairRequest, NewRoom,
};
use crate::utils::fields;
use std::io::{BufRead, Write};

pub fn add_customer<R: BufRead, W: Write>(
    exec: &mut dyn Executor,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    let id = next_id(exec, IdSource::Customer)?;

    let first_name = console.ask("First name")?;
    let last_name = console.ask("Last name")?;
    let address = console.ask("Address")?;
    let phone = console.ask("Phone Number")?;
    let dob = console.ask("DOB(mm/dd/yyyy)")?;
    let gender = console.ask("Gender(Male, Female, or Other)")?;

    let record = NewCustomer {
        id,
        first_name: fields::required("first name", &first_name)?,
        last_name: fields::required("last name", &last_name)?,
        address: fields::required("address", &address)?,
        phone: fields::phone("phone number", &phone)?,
        dob: fields::date("DOB", &dob)?,
        gender: Gender::from_input(&gender)
            .ok_or_else(|| AppError::invalid("gender", format!("'{}'", gender.trim())))?,
    };

    AddLogic::apply(exec, console.out(), &record)
}

pub fn add_room<R: BufRead, W: Write>(
    exec: &mut dyn Executor,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    let hotel_id = console.ask("Hotel ID")?;
    let room_no = console.ask("RoomNo")?;
    let room_type = console.ask("Room Type")?;

    let record = NewRoom {
        hotel_id: fields::integer("hotel ID", &hotel_id)?,
        room_no: fields::integer("room number", &room_no)?,
        room_type: fields::required("room type", &room_type)?,
    };

    AddLogic::apply(exec, console.out(), &record)
}

pub fn add_maintenance_company<R: BufRead, W: Write>(
    exec: &mut dyn Executor,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    let id = next_id(exec, IdSource::MaintenanceCompany)?;

    let name = console.ask("Company Name")?;
    let address = console.ask("Address")?;
    let certified = console.ask("Certified?(Y/N)")?;

    let record = NewMaintenanceCompany {
        id,
        name: fields::required("company name", &name)?,
        address: fields::required("address", &address)?,
        certified: fields::yes_no("certified", &certified)?,
    };

    AddLogic::apply(exec, console.out(), &record)
}

pub fn add_repair<R: BufRead, W: Write>(
    exec: &mut dyn Executor,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    let id = next_id(exec, IdSource::Repair)?;

    let hotel_id = console.ask("Hotel ID")?;
    let room_no = console.ask("RoomNo")?;
    let company_id = console.ask("Maintenance Company ID")?;
    let date = console.ask("Repair Date(mm/dd/yyyy)")?;
    let description = console.ask("Description")?;
    let repair_type = console.ask("Repair Type")?;

    let record = NewRepair {
        id,
        hotel_id: fields::integer("hotel ID", &hotel_id)?,
        room_no: fields::integer("room number", &room_no)?,
        company_id: fields::integer("company ID", &company_id)?,
        date: fields::date("repair date", &date)?,
        description: fields::required("description", &description)?,
        repair_type: fields::required("repair type", &repair_type)?,
    };

    AddLogic::apply(exec, console.out(), &record)
}

pub fn book_room<R: BufRead, W: Write>(
    exec: &mut dyn Executor,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    let id = next_id(exec, IdSource::Booking)?;

    let customer_id = console.ask("Customer ID")?;
    let hotel_id = console.ask("Hotel ID")?;
    let room_no = console.ask("RoomNo")?;
    let date = console.ask("Booking Date(mm/dd/yyyy)")?;
    let people = console.ask("Number of People")?;
    let price = console.ask("Price")?;

    let record = NewBooking {
        id,
        customer_id: fields::integer("customer ID", &customer_id)?,
        hotel_id: fields::integer("hotel ID", &hotel_id)?,
        room_no: fields::integer("room number", &room_no)?,
        date: fields::date("booking date", &date)?,
        people: fields::integer("number of people", &people)?,
        price: fields::decimal("price", &price)?,
    };

    AddLogic::apply(exec, console.out(), &record)
}

pub fn assign_house_cleaning<R: BufRead, W: Write>(
    exec: &mut dyn Executor,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    let id = next_id(exec, IdSource::Assignment)?;

    let staff_id = console.ask("Staff ID")?;
    let hotel_id = console.ask("Hotel ID")?;
    let room_no = console.ask("RoomNo")?;

    let record = NewAssignment {
        id,
        staff_id: fields::integer("staff ID", &staff_id)?,
        hotel_id: fields::integer("hotel ID", &hotel_id)?,
        room_no: fields::integer("room number", &room_no)?,
    };

    AddLogic::apply(exec, console.out(), &record)
}

pub fn raise_repair_request<R: BufRead, W: Write>(
    exec: &mut dyn Executor,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    let id = next_id(exec, IdSource::Request)?;

    let manager_id = console.ask("Manager ID")?;
    let repair_id = console.ask("Repair ID")?;
    let date = console.ask("Request Date(mm/dd/yyyy)")?;
    let description = console.ask("Description")?;

    let record = NewRepairRequest {
        id,
        manager_id: fields::integer("manager ID", &manager_id)?,
        repair_id: fields::integer("repair ID", &repair_id)?,
        date: fields::date("request date", &date)?,
        description: fields::required("description", &description)?,
    };

    AddLogic::apply(exec, console.out(), &record)
}
