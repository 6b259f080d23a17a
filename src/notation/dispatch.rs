//! # Parallel Dispatcher
//!
//! Fans work items out to a fixed pool of worker threads and collects the results.
//! All items are queued before the workers start pulling, and the queue is closed so
//! each worker stops when it runs dry.  Results arrive in whatever order the workers
//! finish, so they are sorted by line number once all of them are in.

use std::sync::{mpsc,Mutex};
use log::{debug,info};
use super::converter::Converter;
use super::{Converted,Error,WorkItem};
use crate::DYNERR;

/// Number of workers to start, never more than the host's logical processors,
/// and never more than the number of items.  `requested` can lower the count further.
pub fn worker_count(requested: Option<usize>,items: usize) -> usize {
    let available = match std::thread::available_parallelism() {
        Ok(n) => n.get(),
        Err(_) => 1
    };
    let mut ans = match requested {
        Some(n) if n > 0 => usize::min(n,available),
        _ => available
    };
    ans = usize::min(ans,items);
    usize::max(ans,1)
}

/// Convert all items using `workers` threads, returning them in line number order.
pub fn dispatch(items: Vec<WorkItem>,converter: &Converter,workers: usize) -> Result<Vec<Converted>,DYNERR> {
    let count = items.len();
    let (job_tx,job_rx) = mpsc::sync_channel::<WorkItem>(usize::max(count,1));
    let (result_tx,result_rx) = mpsc::sync_channel::<Converted>(usize::max(count,1));
    for item in items {
        job_tx.send(item)?;
    }
    drop(job_tx);
    let jobs = Mutex::new(job_rx);
    info!("starting {} concurrent workers",workers);
    let mut results: Vec<Converted> = std::thread::scope(|scope| -> Result<Vec<Converted>,Error> {
        let mut handles = Vec::new();
        for w in 0..workers {
            let jobs = &jobs;
            let results = result_tx.clone();
            handles.push(scope.spawn(move || -> usize {
                let mut done = 0;
                loop {
                    // hold the lock only while taking the next item
                    let next = match jobs.lock() {
                        Ok(rx) => rx.recv(),
                        Err(_) => break
                    };
                    match next {
                        Ok(item) => {
                            if results.send(converter.convert(item)).is_err() {
                                break;
                            }
                            done += 1;
                        },
                        Err(_) => break
                    }
                }
                debug!("worker {} converted {} lines",w,done);
                done
            }));
        }
        drop(result_tx);
        let mut collected = Vec::with_capacity(count);
        for _i in 0..count {
            match result_rx.recv() {
                Ok(converted) => collected.push(converted),
                Err(_) => break
            }
        }
        for handle in handles {
            if handle.join().is_err() {
                return Err(Error::WorkerFailed);
            }
        }
        Ok(collected)
    })?;
    if results.len() != count {
        return Err(Box::new(Error::LostItems(count,results.len())));
    }
    results.sort_by_key(|c| c.item.line_number);
    Ok(results)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use super::*;
    use crate::notation::opcodes::{OpcodeTable,OpcodeEntry};
    use crate::notation::{ConversionOptions,LineKind};

    fn converter() -> Converter {
        let mut table = OpcodeTable::new();
        table.insert("nop",OpcodeEntry::new("nop",1));
        table.insert("lda.#",OpcodeEntry::new("lda #?",2));
        Converter::new(Arc::new(table),ConversionOptions::new())
    }

    #[test]
    fn order_is_restored() {
        let conv = converter();
        let items: Vec<WorkItem> = (1..=500).map(|i| match i % 4 {
            0 => WorkItem::new(i,"; comment"),
            1 => WorkItem::new(i,"        nop"),
            2 => WorkItem::new(i,"        lda.# 01"),
            _ => WorkItem::new(i,"")
        }).collect();
        let results = dispatch(items,&conv,4).expect("dispatch failed");
        assert_eq!(results.len(),500);
        for (i,c) in results.iter().enumerate() {
            assert_eq!(c.item.line_number,i+1);
        }
        assert_eq!(results[0].kind,LineKind::Opcode);
        assert_eq!(results[1].item.payload.trim(),"lda #$01");
        assert_eq!(results[2].kind,LineKind::Empty);
        assert_eq!(results[3].item.payload,"; comment");
    }

    #[test]
    fn shuffled_input_comes_out_sorted() {
        let conv = converter();
        let items = vec![
            WorkItem::new(3,"three"),
            WorkItem::new(1,"one"),
            WorkItem::new(2,"two")
        ];
        let results = dispatch(items,&conv,2).expect("dispatch failed");
        let labels: Vec<&str> = results.iter().map(|c| c.item.payload.as_str()).collect();
        assert_eq!(labels,vec!["one","two","three"]);
    }

    #[test]
    fn no_items() {
        let conv = converter();
        let results = dispatch(Vec::new(),&conv,worker_count(None,0)).expect("dispatch failed");
        assert!(results.is_empty());
    }

    #[test]
    fn worker_bounds() {
        assert_eq!(worker_count(None,0),1);
        assert_eq!(worker_count(Some(1),100),1);
        assert!(worker_count(None,100) >= 1);
        assert!(worker_count(Some(1000),3) <= 3);
    }
}
