use crate::factory::structs::driver_descriptor::DriverDescriptor;
use std::fmt;

impl fmt::Debug for DriverDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DriverDescriptor")
            .field("name", &self.name)
            .field("required", &self.required)
            .finish()
    }
}
