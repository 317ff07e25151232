pub mod audit_file;
