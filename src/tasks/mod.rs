pub mod glove;
