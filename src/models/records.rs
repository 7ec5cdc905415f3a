//! Records the operator can create. Each one knows its INSERT statement
//! and the confirmation text echoed before it is sent.

use crate::db::Statement;
use crate::models::gender::Gender;
use chrono::NaiveDate;
use rust_decimal::Decimal;

pub trait Insertable {
    fn insert_statement(&self) -> Statement;
    fn summary(&self) -> String;
}

fn fmt_date(d: &NaiveDate) -> String {
    d.format("%m/%d/%Y").to_string()
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewCustomer {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub phone: Decimal,
    pub dob: NaiveDate,
    pub gender: Gender,
}

impl Insertable for NewCustomer {
    fn insert_statement(&self) -> Statement {
        Statement::new(
            "INSERT INTO customer (customerID, fName, lName, Address, phNo, DOB, gender)
             VALUES ($1, $2, $3, $4, $5, $6, $7::text::GenderType)",
        )
        .bind(self.id)
        .bind(self.first_name.as_str())
        .bind(self.last_name.as_str())
        .bind(self.address.as_str())
        .bind(self.phone)
        .bind(self.dob)
        .bind(self.gender.to_db_str())
    }

    fn summary(&self) -> String {
        format!(
            "Your Information:\nCustomerID: {}\nname: {} {}\naddress: {}\nphone number: {}\nDOB: {}\nGender: {}",
            self.id,
            self.first_name,
            self.last_name,
            self.address,
            self.phone,
            fmt_date(&self.dob),
            self.gender.to_db_str()
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewRoom {
    pub hotel_id: i32,
    pub room_no: i32,
    pub room_type: String,
}

impl Insertable for NewRoom {
    fn insert_statement(&self) -> Statement {
        Statement::new("INSERT INTO room (hotelID, roomNo, roomType) VALUES ($1, $2, $3)")
            .bind(self.hotel_id)
            .bind(self.room_no)
            .bind(self.room_type.as_str())
    }

    fn summary(&self) -> String {
        format!(
            "Add Room:\nHotel ID: {}\nroomNo: {}\nRoom Type: {}",
            self.hotel_id, self.room_no, self.room_type
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewMaintenanceCompany {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub certified: bool,
}

impl Insertable for NewMaintenanceCompany {
    fn insert_statement(&self) -> Statement {
        Statement::new(
            "INSERT INTO maintenanceCompany (cmpID, name, address, isCertified)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(self.id)
        .bind(self.name.as_str())
        .bind(self.address.as_str())
        .bind(self.certified)
    }

    fn summary(&self) -> String {
        format!(
            "Add Maintenance Company:\nCompany ID: {}\nCompany Name: {}\nAddress: {}\nCertified: {}",
            self.id,
            self.name,
            self.address,
            if self.certified { "TRUE" } else { "FALSE" }
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewRepair {
    pub id: i32,
    pub hotel_id: i32,
    pub room_no: i32,
    pub company_id: i32,
    pub date: NaiveDate,
    pub description: String,
    pub repair_type: String,
}

impl Insertable for NewRepair {
    fn insert_statement(&self) -> Statement {
        Statement::new(
            "INSERT INTO repair (rID, hotelID, roomNo, mCompany, repairDate, description, repairType)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(self.id)
        .bind(self.hotel_id)
        .bind(self.room_no)
        .bind(self.company_id)
        .bind(self.date)
        .bind(self.description.as_str())
        .bind(self.repair_type.as_str())
    }

    fn summary(&self) -> String {
        format!(
            "Repair ID: {}\nHotel ID: {}\nRoomNo: {}\nMaintenance Company ID: {}\nRepair Date: {}\nDescription: {}\nRepair Type: {}",
            self.id,
            self.hotel_id,
            self.room_no,
            self.company_id,
            fmt_date(&self.date),
            self.description,
            self.repair_type
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewBooking {
    pub id: i32,
    pub customer_id: i32,
    pub hotel_id: i32,
    pub room_no: i32,
    pub date: NaiveDate,
    pub people: i32,
    pub price: Decimal,
}

impl Insertable for NewBooking {
    fn insert_statement(&self) -> Statement {
        Statement::new(
            "INSERT INTO booking (bID, customer, hotelID, roomNo, bookingDate, noOfPeople, price)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(self.id)
        .bind(self.customer_id)
        .bind(self.hotel_id)
        .bind(self.room_no)
        .bind(self.date)
        .bind(self.people)
        .bind(self.price)
    }

    fn summary(&self) -> String {
        format!(
            "Booking ID: {}\nCustomer ID: {}\nHotel ID: {}\nRoomNo: {}\nBooking Date: {}\nNumber of People: {}\nPrice: {}",
            self.id,
            self.customer_id,
            self.hotel_id,
            self.room_no,
            fmt_date(&self.date),
            self.people,
            self.price
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewAssignment {
    pub id: i32,
    pub staff_id: i32,
    pub hotel_id: i32,
    pub room_no: i32,
}

impl Insertable for NewAssignment {
    fn insert_statement(&self) -> Statement {
        Statement::new(
            "INSERT INTO assigned (asgID, staffID, hotelID, roomNo) VALUES ($1, $2, $3, $4)",
        )
        .bind(self.id)
        .bind(self.staff_id)
        .bind(self.hotel_id)
        .bind(self.room_no)
    }

    fn summary(&self) -> String {
        format!(
            "Assignment ID: {}\nStaff ID: {}\nHotel ID: {}\nRoomNo: {}",
            self.id, self.staff_id, self.hotel_id, self.room_no
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewRepairRequest {
    pub id: i32,
    pub manager_id: i32,
    pub repair_id: i32,
    pub date: NaiveDate,
    pub description: String,
}

impl Insertable for NewRepairRequest {
    fn insert_statement(&self) -> Statement {
        Statement::new(
            "INSERT INTO request (reqID, managerID, repairID, requestDate, description)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(self.id)
        .bind(self.manager_id)
        .bind(self.repair_id)
        .bind(self.date)
        .bind(self.description.as_str())
    }

    fn summary(&self) -> String {
        format!(
            "Request ID: {}\nManager ID: {}\nRepair ID: {}\nRequest Date: {}\nDescription: {}",
            self.id,
            self.manager_id,
            self.repair_id,
            fmt_date(&self.date),
            self.description
        )
    }
}
