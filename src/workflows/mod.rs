pub mod preapproval;
