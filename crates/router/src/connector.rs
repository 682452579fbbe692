pub mod veritrans;
