use crate::registry::driver::{Driver, NewDriver};

/// In-memory driver store. Drivers are never modified once registered.
#[derive(Debug)]
pub struct DriverRegistry {
    drivers: Vec<Driver>,
    next_id: i64,
}

impl Default for DriverRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl DriverRegistry {
    pub fn new() -> Self {
        Self {
            drivers: Vec::new(),
            next_id: 1,
        }
    }

    /// Registry holding the two startup drivers, with the counter at 3.
    pub fn seeded() -> Self {
        let mut registry = Self::new();
        registry.create_driver(NewDriver::new("John Doe").at("Seattle"));
        registry.create_driver(NewDriver::new("Sarah Lee").at("Bellevue"));
        registry
    }

    pub fn list_drivers(&self) -> &[Driver] {
        &self.drivers
    }

    pub fn get_driver(&self, id: i64) -> Option<&Driver> {
        self.drivers.iter().find(|d| d.id == id)
    }

    /// Register a driver under the next id.
    pub fn create_driver(&mut self, new: NewDriver) -> &Driver {
        let driver = Driver::from_registration(self.next_id, new);
        self.next_id += 1;
        self.drivers.push(driver);
        &self.drivers[self.drivers.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.drivers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }
}
