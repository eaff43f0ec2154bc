
mod options;
mod property_model;
