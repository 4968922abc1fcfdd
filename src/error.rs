use snafu::Location;
use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Index out of range, index: {}, len: {}", index, len))]
    OutOfRange {
        index: usize,
        len: usize,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display(
        "Capacity {} exceeds the maximum addressable slot count",
        capacity
    ))]
    CapacityOverflow {
        capacity: usize,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("Failed to allocate {} slots", slots))]
    Allocate {
        slots: usize,
        #[snafu(implicit)]
        location: Location,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
