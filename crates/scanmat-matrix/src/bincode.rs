use crate::{Element, Matrix};

impl<T> bincode::enc::Encode for Matrix<T>
where
    T: Element + bincode::enc::Encode,
{
    fn encode<E: bincode::enc::Encoder>(
        &self,
        encoder: &mut E,
    ) -> Result<(), bincode::error::EncodeError> {
        bincode::Encode::encode(&self.shape.cols, encoder)?;
        bincode::Encode::encode(&self.shape.rows, encoder)?;
        bincode::Encode::encode(&self.name, encoder)?;
        bincode::Encode::encode(self.as_slice(), encoder)?;
        Ok(())
    }
}

impl<T, C> bincode::de::Decode<C> for Matrix<T>
where
    T: Element + bincode::de::Decode<C>,
{
    fn decode<D: bincode::de::Decoder<Context = C>>(
        decoder: &mut D,
    ) -> Result<Self, bincode::error::DecodeError> {
        let cols: usize = bincode::Decode::decode(decoder)?;
        let rows: usize = bincode::Decode::decode(decoder)?;
        let name: Option<String> = bincode::Decode::decode(decoder)?;
        let data: Vec<T> = bincode::Decode::decode(decoder)?;
        let mut m = Matrix::from_vec(cols, rows, data).map_err(|e| {
            bincode::error::DecodeError::OtherString(format!("Matrix error: {e}"))
        })?;
        m.name = name;
        Ok(m)
    }
}
