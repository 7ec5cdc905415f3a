//! Canned analytical reports.
//!
//! Each report turns its parameters into a single parameterized SELECT.
//! Aggregates are grouped so that "nothing to count" yields zero rows
//! rather than a single zero-valued row.

use crate::db::{Executor, Statement};
use crate::errors::{AppError, AppResult};
use crate::utils::date::week_end;
use chrono::NaiveDate;
use std::io::Write;

/// Inclusive date window, `from <= to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> AppResult<Self> {
        if from > to {
            return Err(AppError::invalid(
                "date range",
                format!("start {from} is after end {to}"),
            ));
        }
        Ok(Self { from, to })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    AvailableRooms {
        hotel_id: i32,
        on: NaiveDate,
    },
    BookedRooms {
        hotel_id: i32,
        on: NaiveDate,
    },
    WeeklyBookings {
        hotel_id: i32,
        start: NaiveDate,
    },
    TopRoomPrices {
        range: DateRange,
        k: i64,
    },
    TopCustomerBookings {
        first_name: String,
        last_name: String,
        k: i64,
    },
    CustomerTotalCost {
        hotel_id: i32,
        first_name: String,
        last_name: String,
        range: DateRange,
    },
    CompanyRepairs {
        company: String,
    },
    TopCompanies {
        k: i64,
    },
    RepairsPerYear {
        hotel_id: i32,
        room_no: i32,
    },
}

const AVAILABLE_ROOMS: &str = "
    SELECT COUNT(*) AS available_rooms
    FROM room r
    WHERE r.hotelID = $1
      AND NOT EXISTS (
          SELECT 1 FROM booking b
          WHERE b.hotelID = r.hotelID
            AND b.roomNo = r.roomNo
            AND b.bookingDate = $2)
    GROUP BY r.hotelID";

const BOOKED_ROOMS: &str = "
    SELECT COUNT(DISTINCT b.roomNo) AS booked_rooms
    FROM booking b
    WHERE b.hotelID = $1 AND b.bookingDate = $2
    GROUP BY b.hotelID";

const WEEKLY_BOOKINGS: &str = "
    SELECT b.bID, b.roomNo, b.customer, b.bookingDate, b.noOfPeople, b.price
    FROM booking b
    WHERE b.hotelID = $1 AND b.bookingDate BETWEEN $2 AND $3
    ORDER BY b.bookingDate, b.roomNo";

const TOP_ROOM_PRICES: &str = "
    SELECT b.hotelID, b.roomNo, b.bookingDate, b.price
    FROM booking b
    WHERE b.bookingDate BETWEEN $1 AND $2
    ORDER BY b.price DESC, b.bookingDate
    LIMIT $3";

const TOP_CUSTOMER_BOOKINGS: &str = "
    SELECT b.bID, b.hotelID, b.roomNo, b.bookingDate, b.price
    FROM booking b
    JOIN customer c ON c.customerID = b.customer
    WHERE c.fName = $1 AND c.lName = $2
    ORDER BY b.price DESC, b.bookingDate
    LIMIT $3";

const CUSTOMER_TOTAL_COST: &str = "
    SELECT c.customerID, SUM(b.price) AS total_cost
    FROM booking b
    JOIN customer c ON c.customerID = b.customer
    WHERE b.hotelID = $1
      AND c.fName = $2 AND c.lName = $3
      AND b.bookingDate BETWEEN $4 AND $5
    GROUP BY c.customerID
    ORDER BY c.customerID";

const COMPANY_REPAIRS: &str = "
    SELECT r.rID, r.repairType, r.hotelID, r.roomNo
    FROM repair r
    JOIN maintenanceCompany m ON m.cmpID = r.mCompany
    WHERE m.name = $1
    ORDER BY r.rID";

const TOP_COMPANIES: &str = "
    SELECT m.name, COUNT(r.rID) AS repair_count
    FROM maintenanceCompany m
    JOIN repair r ON r.mCompany = m.cmpID
    GROUP BY m.cmpID, m.name
    ORDER BY repair_count DESC, m.name
    LIMIT $1";

const REPAIRS_PER_YEAR: &str = "
    SELECT EXTRACT(YEAR FROM r.repairDate)::int AS repair_year, COUNT(*) AS repairs
    FROM repair r
    WHERE r.hotelID = $1 AND r.roomNo = $2
    GROUP BY repair_year
    ORDER BY repair_year";

impl Report {
    pub fn statement(&self) -> AppResult<Statement> {
        let stmt = match self {
            Report::AvailableRooms { hotel_id, on } => {
                Statement::new(AVAILABLE_ROOMS).bind(*hotel_id).bind(*on)
            }
            Report::BookedRooms { hotel_id, on } => {
                Statement::new(BOOKED_ROOMS).bind(*hotel_id).bind(*on)
            }
            Report::WeeklyBookings { hotel_id, start } => {
                let end = week_end(*start)
                    .ok_or_else(|| AppError::invalid("start date", "out of range"))?;
                Statement::new(WEEKLY_BOOKINGS)
                    .bind(*hotel_id)
                    .bind(*start)
                    .bind(end)
            }
            Report::TopRoomPrices { range, k } => Statement::new(TOP_ROOM_PRICES)
                .bind(range.from)
                .bind(range.to)
                .bind(*k),
            Report::TopCustomerBookings {
                first_name,
                last_name,
                k,
            } => Statement::new(TOP_CUSTOMER_BOOKINGS)
                .bind(first_name.as_str())
                .bind(last_name.as_str())
                .bind(*k),
            Report::CustomerTotalCost {
                hotel_id,
                first_name,
                last_name,
                range,
            } => Statement::new(CUSTOMER_TOTAL_COST)
                .bind(*hotel_id)
                .bind(first_name.as_str())
                .bind(last_name.as_str())
                .bind(range.from)
                .bind(range.to),
            Report::CompanyRepairs { company } => {
                Statement::new(COMPANY_REPAIRS).bind(company.as_str())
            }
            Report::TopCompanies { k } => Statement::new(TOP_COMPANIES).bind(*k),
            Report::RepairsPerYear { hotel_id, room_no } => Statement::new(REPAIRS_PER_YEAR)
                .bind(*hotel_id)
                .bind(*room_no),
        };
        Ok(stmt)
    }
}

pub struct ReportLogic;

impl ReportLogic {
    /// Run the report, render its rows, and finish with the row count line.
    pub fn apply(
        exec: &mut dyn Executor,
        out: &mut dyn Write,
        report: &Report,
    ) -> AppResult<usize> {
        let statement = report.statement()?;
        let count = exec.query(&statement, out)?;
        writeln!(out, "total row(s): {count}")?;
        Ok(count)
    }
}
