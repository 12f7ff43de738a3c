use serde::ser::SerializeStruct;
use serde::Deserialize;

use crate::{storage::Shape, Element, Matrix};

impl<T> serde::Serialize for Matrix<T>
where
    T: Element + serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("Matrix", 3)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("shape", &self.shape)?;
        state.serialize_field("data", self.as_slice())?;
        state.end()
    }
}

impl<'de, T> serde::Deserialize<'de> for Matrix<T>
where
    T: Element + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct MatrixData<T> {
            #[serde(default)]
            name: Option<String>,
            shape: Shape,
            data: Vec<T>,
        }

        let MatrixData { name, shape, data } = MatrixData::deserialize(deserializer)?;

        let mut m = Matrix::from_vec(shape.cols, shape.rows, data).map_err(serde::de::Error::custom)?;
        m.name = name;
        Ok(m)
    }
}
