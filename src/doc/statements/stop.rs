/*!
# `STOP`

## Purpose
Stops the program.

## Remarks
The report is `9` with the line `CONT` would continue at.

## Example
```text
10 STOP
20 PRINT "AFTER"
RUN
9/20
```

*/
