use crate::core::models::{Column, Task};

/// Owns the board's ordered column and task sequences.
///
/// Array index is display position. A column's tasks are the subsequence of
/// the global task order whose `column_id` matches, so per-column order never
/// needs separate bookkeeping.
///
/// Mutations with an id that is no longer present are silent no-ops: deleting
/// or editing something already gone is treated as a harmless race with an
/// earlier deletion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardStore {
    columns: Vec<Column>,
    tasks: Vec<Task>,
}

impl BoardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn column(&self, id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == id)
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Tasks belonging to one column, in display order.
    pub fn tasks_in(&self, column_id: &str) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| t.column_id == column_id)
            .cloned()
            .collect()
    }

    pub fn create_column(&mut self) {
        self.columns.push(Column::new());
    }

    pub fn update_column_title(&mut self, id: &str, title: String) {
        if let Some(column) = self.columns.iter_mut().find(|c| c.id == id) {
            column.update_title(title);
        }
    }

    /// Removes the column and every task it owns as a single transition.
    pub fn delete_column(&mut self, id: &str) {
        self.columns.retain(|c| c.id != id);
        self.tasks.retain(|t| t.column_id != id);
    }

    pub fn create_task(&mut self, column_id: &str) {
        self.tasks.push(Task::new(column_id.to_string()));
    }

    pub fn update_task_content(&mut self, id: &str, content: String) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.update_content(content);
        }
    }

    pub fn delete_task(&mut self, id: &str) {
        self.tasks.retain(|t| t.id != id);
    }

    /// Task-over-task commit: the active task adopts the over task's column
    /// and takes its position in the global sequence.
    pub fn move_task(&mut self, active_id: &str, over_id: &str) {
        if active_id == over_id {
            return;
        }
        let Some(from) = self.tasks.iter().position(|t| t.id == active_id) else {
            return;
        };
        let Some(to) = self.tasks.iter().position(|t| t.id == over_id) else {
            return;
        };
        self.tasks[from].column_id = self.tasks[to].column_id.clone();
        array_move(&mut self.tasks, from, to);
    }

    /// Task-over-column commit: the task joins the target column at the end
    /// of that column's run.
    pub fn move_task_to_column(&mut self, task_id: &str, column_id: &str) {
        if self.column(column_id).is_none() {
            return;
        }
        let Some(from) = self.tasks.iter().position(|t| t.id == task_id) else {
            return;
        };
        let mut task = self.tasks.remove(from);
        task.column_id = column_id.to_string();
        let to = self
            .tasks
            .iter()
            .rposition(|t| t.column_id == column_id)
            .map_or(self.tasks.len(), |i| i + 1);
        self.tasks.insert(to, task);
    }

    /// Moves the active column to the over column's index.
    pub fn move_column(&mut self, active_id: &str, over_id: &str) {
        if active_id == over_id {
            return;
        }
        let Some(from) = self.columns.iter().position(|c| c.id == active_id) else {
            return;
        };
        let Some(to) = self.columns.iter().position(|c| c.id == over_id) else {
            return;
        };
        array_move(&mut self.columns, from, to);
    }
}

/// Relocates the element at `from` to `to`, keeping the relative order of
/// every other element. Not a swap.
fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from == to || from >= items.len() || to >= items.len() {
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column_ids(store: &BoardStore) -> Vec<String> {
        store.columns().iter().map(|c| c.id.clone()).collect()
    }

    fn add_column(store: &mut BoardStore) -> String {
        store.create_column();
        store.columns().last().unwrap().id.clone()
    }

    fn add_task(store: &mut BoardStore, column_id: &str) -> String {
        store.create_task(column_id);
        store.tasks().last().unwrap().id.clone()
    }

    #[test]
    fn create_column_appends_with_placeholder_title() {
        let mut store = BoardStore::new();
        store.create_column();
        store.create_column();

        assert_eq!(store.columns().len(), 2);
        assert_eq!(
            store.columns()[0].title,
            crate::core::models::DEFAULT_COLUMN_TITLE
        );
    }

    #[test]
    fn delete_column_cascades_to_its_tasks() {
        let mut store = BoardStore::new();
        let keep = add_column(&mut store);
        let doomed = add_column(&mut store);
        let kept_task = add_task(&mut store, &keep);
        add_task(&mut store, &doomed);
        add_task(&mut store, &doomed);

        store.delete_column(&doomed);

        assert_eq!(store.columns().len(), 1);
        assert_eq!(store.tasks().len(), 1);
        assert_eq!(store.tasks()[0].id, kept_task);
    }

    #[test]
    fn delete_only_column_empties_the_task_list() {
        let mut store = BoardStore::new();
        let column = add_column(&mut store);
        add_task(&mut store, &column);
        add_task(&mut store, &column);

        store.delete_column(&column);

        assert!(store.columns().is_empty());
        assert!(store.tasks().is_empty());
    }

    #[test]
    fn updates_with_missing_ids_are_noops() {
        let mut store = BoardStore::new();
        let column = add_column(&mut store);
        let task = add_task(&mut store, &column);
        let before = store.clone();

        store.update_column_title("missing", "Renamed".to_string());
        store.update_task_content("missing", "Rewritten".to_string());
        store.delete_column("missing");
        store.delete_task("missing");

        assert_eq!(store, before);
        assert!(store.task(&task).is_some());
    }

    #[test]
    fn update_column_title_replaces_title_in_place() {
        let mut store = BoardStore::new();
        let column = add_column(&mut store);

        store.update_column_title(&column, "Doing".to_string());

        assert_eq!(store.column(&column).unwrap().title, "Doing");
    }

    #[test]
    fn update_task_content_replaces_content_in_place() {
        let mut store = BoardStore::new();
        let column = add_column(&mut store);
        let task = add_task(&mut store, &column);

        store.update_task_content(&task, "Write the report".to_string());

        assert_eq!(store.task(&task).unwrap().content, "Write the report");
    }

    #[test]
    fn tasks_in_recovers_creation_order_per_column() {
        let mut store = BoardStore::new();
        let left = add_column(&mut store);
        let right = add_column(&mut store);
        let a = add_task(&mut store, &left);
        let b = add_task(&mut store, &right);
        let c = add_task(&mut store, &left);

        let left_ids: Vec<String> = store.tasks_in(&left).iter().map(|t| t.id.clone()).collect();
        let right_ids: Vec<String> = store.tasks_in(&right).iter().map(|t| t.id.clone()).collect();

        assert_eq!(left_ids, vec![a, c]);
        assert_eq!(right_ids, vec![b]);
    }

    #[test]
    fn array_move_keeps_relative_order_of_untouched_elements() {
        let mut items = vec!["A", "B", "C", "D"];
        array_move(&mut items, 2, 0);
        assert_eq!(items, vec!["C", "A", "B", "D"]);

        let mut items = vec!["A", "B", "C", "D"];
        array_move(&mut items, 0, 2);
        assert_eq!(items, vec!["B", "C", "A", "D"]);
    }

    #[test]
    fn array_move_out_of_bounds_is_a_noop() {
        let mut items = vec!["A", "B"];
        array_move(&mut items, 5, 0);
        array_move(&mut items, 0, 5);
        assert_eq!(items, vec!["A", "B"]);
    }

    #[test]
    fn move_task_adopts_over_column_and_position() {
        let mut store = BoardStore::new();
        let left = add_column(&mut store);
        let right = add_column(&mut store);
        let a = add_task(&mut store, &left);
        let b = add_task(&mut store, &left);
        let c = add_task(&mut store, &right);

        store.move_task(&a, &c);

        assert_eq!(store.task(&a).unwrap().column_id, right);
        let global_ids: Vec<String> = store.tasks().iter().map(|t| t.id.clone()).collect();
        assert_eq!(global_ids, vec![b.clone(), c.clone(), a.clone()]);
        let right_ids: Vec<String> = store.tasks_in(&right).iter().map(|t| t.id.clone()).collect();
        assert_eq!(right_ids, vec![c, a]);
    }

    #[test]
    fn move_task_with_missing_id_is_a_noop() {
        let mut store = BoardStore::new();
        let column = add_column(&mut store);
        let task = add_task(&mut store, &column);
        let before = store.clone();

        store.move_task(&task, "missing");
        store.move_task("missing", &task);

        assert_eq!(store, before);
    }

    #[test]
    fn move_task_to_column_appends_to_target_run() {
        let mut store = BoardStore::new();
        let left = add_column(&mut store);
        let right = add_column(&mut store);
        let a = add_task(&mut store, &left);
        let b = add_task(&mut store, &right);
        let c = add_task(&mut store, &right);

        store.move_task_to_column(&a, &right);

        assert_eq!(store.task(&a).unwrap().column_id, right);
        let right_ids: Vec<String> = store.tasks_in(&right).iter().map(|t| t.id.clone()).collect();
        assert_eq!(right_ids, vec![b, c, a]);
    }

    #[test]
    fn move_task_to_empty_column_reassigns_ownership() {
        let mut store = BoardStore::new();
        let left = add_column(&mut store);
        let right = add_column(&mut store);
        let task = add_task(&mut store, &left);

        store.move_task_to_column(&task, &right);

        assert!(store.tasks_in(&left).is_empty());
        assert_eq!(store.tasks_in(&right).len(), 1);
    }

    #[test]
    fn move_task_to_unknown_column_is_a_noop() {
        let mut store = BoardStore::new();
        let column = add_column(&mut store);
        let task = add_task(&mut store, &column);
        let before = store.clone();

        store.move_task_to_column(&task, "missing");

        assert_eq!(store, before);
    }

    #[test]
    fn move_column_relocates_to_over_index() {
        let mut store = BoardStore::new();
        let a = add_column(&mut store);
        let b = add_column(&mut store);
        let c = add_column(&mut store);

        store.move_column(&c, &a);

        assert_eq!(column_ids(&store), vec![c, a, b]);
    }

    #[test]
    fn generated_ids_are_unique() {
        let mut store = BoardStore::new();
        for _ in 0..50 {
            store.create_column();
        }
        let first = store.columns()[0].id.clone();
        for _ in 0..50 {
            store.create_task(&first);
        }

        let mut ids: Vec<&str> = store
            .columns()
            .iter()
            .map(|c| c.id.as_str())
            .chain(store.tasks().iter().map(|t| t.id.as_str()))
            .collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 100);
    }
}
