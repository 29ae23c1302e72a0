mod governance;
mod suite;
