use crate::domain::model::{Student, StudentRow};
use crate::domain::ports::Storage;
use crate::utils::error::Result;

/// Moves enrollment records between a `Storage` backend and memory.
pub struct FileProcessor<S: Storage> {
    storage: S,
    file_name: String,
}

impl<S: Storage> FileProcessor<S> {
    pub fn new(storage: S, file_name: impl Into<String>) -> Self {
        Self {
            storage,
            file_name: file_name.into(),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Parse the enrollment file and append its records to `students`.
    ///
    /// The whole file is parsed and validated before anything is appended, so on
    /// error `students` is left exactly as it was. Returns the number of records added.
    pub fn read_data_from_file(&self, students: &mut Vec<Student>) -> Result<usize> {
        let data = self.storage.read_file(&self.file_name)?;
        let rows: Vec<StudentRow> = serde_json::from_slice(&data)?;

        let loaded = rows
            .into_iter()
            .map(Student::try_from)
            .collect::<Result<Vec<_>>>()?;

        let count = loaded.len();
        students.extend(loaded);
        tracing::debug!("Loaded {} students from {}", count, self.file_name);
        Ok(count)
    }

    /// Overwrite the enrollment file with `students`, in order, as a compact JSON array.
    pub fn write_data_to_file(&self, students: &[Student]) -> Result<()> {
        let rows: Vec<StudentRow> = students.iter().map(StudentRow::from).collect();
        let json = serde_json::to_vec(&rows)?;
        self.storage.write_file(&self.file_name, &json)?;
        tracing::info!("Saved {} students to {}", students.len(), self.file_name);
        Ok(())
    }
}
