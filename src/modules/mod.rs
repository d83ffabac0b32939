pub mod employee_import;
