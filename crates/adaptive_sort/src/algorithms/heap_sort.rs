use crate::order::Comparator;

pub fn heap_sort<T, C>(data: &mut [T], cmp: &mut C) -> Result<(), C::Error>
where
    C: Comparator<T>,
{
    let len = data.len();
    if len < 2 {
        return Ok(());
    }

    let mut start = (len - 2) / 2;
    loop {
        sift_down(data, start, len, cmp)?;
        if start == 0 {
            break;
        }
        start -= 1;
    }

    let mut end = len - 1;
    while end > 0 {
        data.swap(0, end);
        sift_down(data, 0, end, cmp)?;
        end -= 1;
    }
    Ok(())
}

#[inline]
fn sift_down<T, C>(data: &mut [T], mut root: usize, end: usize, cmp: &mut C) -> Result<(), C::Error>
where
    C: Comparator<T>,
{
    loop {
        let child = root * 2 + 1;
        if child >= end {
            return Ok(());
        }

        let mut largest = child;
        if child + 1 < end && cmp.is_less(&data[child], &data[child + 1])? {
            largest = child + 1;
        }

        if !cmp.is_less(&data[root], &data[largest])? {
            return Ok(());
        }

        data.swap(root, largest);
        root = largest;
    }
}
