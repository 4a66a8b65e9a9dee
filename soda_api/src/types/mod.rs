mod food_truck;
pub use self::food_truck::FoodTruck;
