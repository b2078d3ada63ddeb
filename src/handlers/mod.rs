mod batch;

pub use batch::BatchPathHandler;
