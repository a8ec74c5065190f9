use crate::core::library::LibraryResult;

pub trait Repository<Entity>: Sync + Send {
    // create an entity
    fn create(&mut self, entity: Entity) -> LibraryResult<usize>;

    // get an entity
    fn get(&self, id: i64) -> LibraryResult<Entity>;

    // delete every entity with the id
    fn delete(&mut self, id: i64) -> LibraryResult<Vec<Entity>>;

    // delete all entities, returns how many were dropped
    fn clear(&mut self) -> usize;

    // all entities in insertion order
    fn all(&self) -> Vec<Entity>;

    // entities accepted by the predicate, in insertion order
    fn query(&self, predicate: &dyn Fn(&Entity) -> bool) -> Vec<Entity>;

    fn count(&self) -> usize;
}
