mod concrete;
mod interfaces;
